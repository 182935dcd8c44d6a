//! Random output commands: random, lorem.

use rand::Rng;
use rand::seq::SliceRandom;
use webterm_types::error::{Result, WebTermError};

use crate::interpreter::{Command, CommandRegistry, Environment};

const RANDOM_DEFAULT_MIN: i64 = 0;
const RANDOM_DEFAULT_MAX: i64 = 100;
const LOREM_DEFAULT_WORDS: i64 = 50;
/// Largest word count `lorem` will generate.
const LOREM_MAX_WORDS: i64 = 10_000;

const LOREM_WORDS: [&str; 19] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

/// Parse an optional integer argument, falling back to `default`.
fn int_arg(arg: Option<&&str>, default: i64) -> Result<i64> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|_| WebTermError::InvalidArgument(format!("'{s}' is not an integer"))),
        None => Ok(default),
    }
}

// ---------------------------------------------------------------------------
// random
// ---------------------------------------------------------------------------

struct RandomCmd;
impl Command for RandomCmd {
    fn name(&self) -> &str {
        "random"
    }
    fn description(&self) -> &str {
        "Generate random number"
    }
    fn usage(&self) -> Option<&str> {
        Some("random [min] [max]")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let min = int_arg(args.first(), RANDOM_DEFAULT_MIN)?;
        let max = int_arg(args.get(1), RANDOM_DEFAULT_MAX)?;
        let n = random_in_range(&mut rand::thread_rng(), min, max);
        env.console.write_line(&n.to_string());
        Ok(())
    }
}

/// Uniform pick from the inclusive range spanned by `a` and `b`.
fn random_in_range<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

// ---------------------------------------------------------------------------
// lorem
// ---------------------------------------------------------------------------

struct LoremCmd;
impl Command for LoremCmd {
    fn name(&self) -> &str {
        "lorem"
    }
    fn description(&self) -> &str {
        "Generate lorem ipsum text"
    }
    fn usage(&self) -> Option<&str> {
        Some("lorem [words]")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let count = int_arg(args.first(), LOREM_DEFAULT_WORDS)?;
        if count > LOREM_MAX_WORDS {
            return Err(WebTermError::InvalidArgument(format!(
                "word count {count} exceeds {LOREM_MAX_WORDS}"
            )));
        }
        // Negative counts behave like zero.
        let count = usize::try_from(count).unwrap_or(0);
        let text = lorem_words(&mut rand::thread_rng(), count);
        env.console.write_line(&text);
        Ok(())
    }
}

/// `count` words drawn independently from the dictionary, space separated.
fn lorem_words<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(word) = LOREM_WORDS.choose(rng) {
            words.push(*word);
        }
    }
    words.join(" ")
}

/// Register random output commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(RandomCmd));
    reg.register(Box::new(LoremCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{builtins, run};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single_int(line: &str) -> i64 {
        let console = run(&builtins(), line);
        let lines = console.lines();
        assert_eq!(lines.len(), 1, "{line} should print one line");
        lines[0].parse().expect("integer output")
    }

    #[test]
    fn random_in_given_range() {
        for _ in 0..500 {
            let n = single_int("random 1 10");
            assert!((1..=10).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn random_default_range() {
        for _ in 0..200 {
            let n = single_int("random");
            assert!((0..=100).contains(&n));
        }
    }

    #[test]
    fn random_min_only_uses_default_max() {
        for _ in 0..200 {
            let n = single_int("random 95");
            assert!((95..=100).contains(&n));
        }
    }

    #[test]
    fn random_degenerate_range() {
        assert_eq!(single_int("random 7 7"), 7);
    }

    #[test]
    fn random_negative_range() {
        for _ in 0..100 {
            let n = single_int("random -5 -1");
            assert!((-5..=-1).contains(&n));
        }
    }

    #[test]
    fn random_reversed_bounds_are_swapped() {
        for _ in 0..100 {
            let n = single_int("random 10 1");
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn random_covers_whole_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let n = random_in_range(&mut rng, 1, 4);
            seen[(n - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn random_rejects_non_integer() {
        let console = run(&builtins(), "random one 10");
        assert_eq!(
            console.lines(),
            vec!["Error executing command: invalid argument: 'one' is not an integer"]
        );
    }

    #[test]
    fn lorem_default_is_fifty_words() {
        let console = run(&builtins(), "lorem");
        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].split(' ').count(), 50);
    }

    #[test]
    fn lorem_word_count_and_dictionary() {
        let console = run(&builtins(), "lorem 12");
        let words: Vec<&str> = console.lines()[0].split(' ').collect();
        assert_eq!(words.len(), 12);
        assert!(words.iter().all(|w| LOREM_WORDS.contains(w)));
    }

    #[test]
    fn lorem_zero_and_negative_print_empty_line() {
        assert_eq!(run(&builtins(), "lorem 0").lines(), vec![""]);
        assert_eq!(run(&builtins(), "lorem -3").lines(), vec![""]);
    }

    #[test]
    fn lorem_huge_count_is_rejected() {
        let console = run(&builtins(), "lorem 1000000000000");
        assert_eq!(
            console.lines(),
            vec!["Error executing command: invalid argument: word count 1000000000000 exceeds 10000"]
        );
    }

    #[test]
    fn lorem_accepts_maximum_count() {
        let console = run(&builtins(), "lorem 10000");
        assert_eq!(console.lines()[0].split(' ').count(), 10_000);
    }

    #[test]
    fn lorem_rejects_non_integer() {
        let console = run(&builtins(), "lorem many");
        assert!(console.lines()[0].starts_with("Error executing command:"));
    }

    #[test]
    fn lorem_is_reproducible_with_seeded_rng() {
        let a = lorem_words(&mut StdRng::seed_from_u64(42), 20);
        let b = lorem_words(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
        assert_eq!(a.split(' ').count(), 20);
    }

    #[test]
    fn dictionary_has_nineteen_words() {
        assert_eq!(LOREM_WORDS.len(), 19);
    }
}
