use ecagen_lib::{
    Background, Config, ConfigurationIssue, Engine, Error as EcaError, Rule, State, Unbounded,
    Wrapped, ALIVE, DEAD,
};
use std::error::Error;

fn cells(s: &str) -> Vec<State> {
    s.chars().map(|c| State::from(c == '1')).collect()
}

fn lines(text: &[&str]) -> String {
    text.iter().map(|line| format!("{}\n", line)).collect()
}

#[test]
fn default() -> Result<(), Box<dyn Error>> {
    let lattice = Config::default().lattice()?;
    assert_eq!(lattice.generations(), 100);
    assert!(lattice.is_rectangular());
    Ok(())
}

#[test]
fn rule_30() -> Result<(), Box<dyn Error>> {
    let lattice = Config::new(30, "010", 5).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&[
            ".......o.......",
            "......ooo......",
            ".....oo..o.....",
            "....oo.oooo....",
            "...oo..o...o...",
        ])
    );
    Ok(())
}

#[test]
fn rule_30_widths() {
    let lattice = Unbounded.run(&Rule::new(30), &cells("010"), 5);
    let widths: Vec<_> = lattice.rows().iter().map(Vec::len).collect();
    assert_eq!(widths, vec![7, 7, 11, 11, 15]);
    assert!(!lattice.is_rectangular());
    assert_eq!(lattice.normalize().width(), 15);
}

#[test]
fn rule_110_grows_left() -> Result<(), Box<dyn Error>> {
    let lattice = Config::new(110, "1", 6).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&[
            ".......o.......",
            "......oo.......",
            ".....ooo.......",
            "....oo.o.......",
            "...ooooo.......",
            "..oo...o.......",
        ])
    );
    Ok(())
}

#[test]
fn identity() -> Result<(), Box<dyn Error>> {
    let initial = cells("0010100");
    let lattice = Unbounded.run(&Rule::new(204), &initial, 20);
    assert_eq!(lattice.background(), Background::Dead);
    for row in lattice.rows() {
        assert_eq!(row, &initial);
    }
    Ok(())
}

#[test]
fn rule_1_oscillates() -> Result<(), Box<dyn Error>> {
    let lattice = Config::new(1, "010", 5).lattice()?;
    assert_eq!(lattice.background(), Background::Alternating);
    assert_eq!(
        lattice.to_string(),
        lines(&["...o...", "oo...oo", "...o...", "oo...oo", "...o..."])
    );
    Ok(())
}

#[test]
fn rule_255_stabilizes() -> Result<(), Box<dyn Error>> {
    let lattice = Config::new(255, "010", 4).lattice()?;
    assert_eq!(lattice.background(), Background::Stable);
    assert_eq!(
        lattice.to_string(),
        lines(&["...o...", "ooooooo", "ooooooo", "ooooooo"])
    );
    Ok(())
}

#[test]
fn padding_uses_own_background() -> Result<(), Box<dyn Error>> {
    // Rule 73 has an alternating background, and its rows grow unevenly.
    let lattice = Config::new(73, "1011", 5).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&[
            "......o.oo.......",
            "ooooo...oo.oooooo",
            "....o.o.oo.o.....",
            "ooo.....oo...oooo",
            "..o.ooo.oo.o.o...",
        ])
    );
    for t in 0..lattice.generations() {
        let row = lattice.row(t).unwrap();
        assert_eq!(row[0], lattice.background_at(t));
        assert_eq!(row[row.len() - 1], lattice.background_at(t));
    }
    Ok(())
}

#[test]
fn backgrounds() {
    for n in 0..=255u8 {
        let rule = Rule::new(n);
        let background = Background::of(&rule);
        for t in 0..10 {
            let expected = if n % 2 == 0 || t == 0 {
                DEAD
            } else if rule.next(ALIVE, ALIVE, ALIVE) == ALIVE {
                ALIVE
            } else {
                State::from(t % 2 == 1)
            };
            assert_eq!(background.at(t), expected, "rule {} at {}", n, t);
        }
    }
}

#[test]
fn margins_are_background() {
    for n in 0..=255u8 {
        let rule = Rule::new(n);
        let lattice = Unbounded.run(&rule, &cells("1101011"), 12);
        for (t, row) in lattice.rows().iter().enumerate() {
            let bg = lattice.background_at(t);
            let len = row.len();
            assert!(
                [row[0], row[1], row[len - 2], row[len - 1]]
                    .iter()
                    .all(|&s| s == bg),
                "rule {} at {}",
                n,
                t
            );
        }
    }
}

#[test]
fn widths_never_shrink() {
    for n in 0..=255u8 {
        let lattice = Unbounded.run(&Rule::new(n), &cells("10011"), 16);
        let widths: Vec<_> = lattice.rows().iter().map(Vec::len).collect();
        assert!(widths.windows(2).all(|w| w[0] <= w[1]), "rule {}", n);
        assert!(widths.iter().all(|w| w % 2 == 1), "rule {}", n);
    }
}

#[test]
fn normalize_is_idempotent() -> Result<(), Box<dyn Error>> {
    for n in [1, 30, 73, 110, 150, 255] {
        let lattice = Config::new(n, "10011", 30).lattice()?;
        assert!(lattice.is_rectangular());
        assert_eq!(lattice.clone().normalize(), lattice);
    }
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let config = Config::new(45, "1100101", 50);
    assert_eq!(config.lattice()?, config.lattice()?);
    let config = config.set_wrap(31);
    assert_eq!(config.lattice()?, config.lattice()?);
    Ok(())
}

#[test]
fn wrapped() -> Result<(), Box<dyn Error>> {
    let rule = Rule::new(30);
    let lattice = Wrapped::new(5)?.run(&rule, &cells("010"), 10);
    assert!(lattice.rows().iter().all(|row| row.len() == 5));
    assert_eq!(
        lattice.to_string(),
        lines(&[
            "..o..", ".ooo.", "oo..o", "..ooo", "ooo..", "o..oo", ".ooo.", "oo..o", "..ooo",
            "ooo..",
        ])
    );
    for t in 0..9 {
        let row = lattice.row(t).unwrap();
        let next = lattice.row(t + 1).unwrap();
        assert_eq!(next[0], rule.next(row[4], row[0], row[1]));
        assert_eq!(next[4], rule.next(row[3], row[4], row[0]));
    }
    Ok(())
}

#[test]
fn wrapped_grows_first() -> Result<(), Box<dyn Error>> {
    let lattice = Wrapped::new(11)?.run(&Rule::new(30), &cells("010"), 6);
    let widths: Vec<_> = lattice.rows().iter().map(Vec::len).collect();
    assert_eq!(widths, vec![7, 7, 11, 11, 11, 11]);

    let lattice = Config::new(30, "010", 6).set_wrap(10).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&[
            ".....o.....",
            "....ooo....",
            "...oo..o...",
            "..oo.oooo..",
            ".oo..o...o.",
            "oo.oooo.ooo",
        ])
    );
    Ok(())
}

#[test]
fn wrapped_never_exceeds_width() -> Result<(), Box<dyn Error>> {
    for n in 0..=255u8 {
        let wrapped = Wrapped::new(9)?;
        let lattice = wrapped.run(&Rule::new(n), &cells("00110110011"), 20);
        assert!(lattice.rows().iter().all(|row| row.len() <= 9), "rule {}", n);
        assert_eq!(lattice.normalize().width(), 9);
    }
    Ok(())
}

#[test]
fn fixed_width() -> Result<(), Box<dyn Error>> {
    let lattice = Config::new(30, "010", 5).set_fixed_width(4).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&["..o..", ".ooo.", "oo..o", "o.ooo", "..o.."])
    );

    let lattice = Config::new(30, "010", 3).set_fixed_width(13).lattice()?;
    assert_eq!(
        lattice.to_string(),
        lines(&["......o......", ".....ooo.....", "....oo..o...."])
    );

    // The wrap width wins over the fixed width.
    let lattice = Config::new(30, "010", 3)
        .set_wrap(5)
        .set_fixed_width(13)
        .lattice()?;
    assert_eq!(lattice.width(), 5);
    Ok(())
}

#[test]
fn errors() {
    assert_eq!(
        Config::new(256, "010", 5).lattice(),
        Err(EcaError::InvalidRule(256))
    );
    assert_eq!(
        Config::new(30, "010", 0).lattice(),
        Err(EcaError::InvalidGenerationCount(0))
    );
    assert_eq!(
        Config::new(30, "", 5).lattice(),
        Err(EcaError::InvalidConfiguration(ConfigurationIssue::Empty))
    );
    assert_eq!(
        Config::new(30, "0120", 5).lattice(),
        Err(EcaError::InvalidConfiguration(
            ConfigurationIssue::InvalidSymbol('2', 2)
        ))
    );
    assert_eq!(
        Config::new(30, "010", 5).set_wrap(1).lattice(),
        Err(EcaError::InvalidWidth(1))
    );
    assert_eq!(
        Config::new(30, "010", 5).set_fixed_width(-2).lattice(),
        Err(EcaError::InvalidWidth(-2))
    );
    assert_eq!(Wrapped::new(4), Err(EcaError::InvalidWidth(4)));
    assert_eq!(Rule::try_from(-3isize), Err(EcaError::InvalidRule(-3)));
}

#[test]
fn random() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let config = Config::random(&mut rng).set_generations(10);
        assert!((0..=255).contains(&config.rule));
        assert!(config.initial.len() <= 6);
        assert_eq!(config.lattice()?.generations(), 10);
    }
    Ok(())
}
