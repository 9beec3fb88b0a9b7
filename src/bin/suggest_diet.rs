//! One-shot recommendation from the command line
//! Usage: cargo run --bin suggest_diet -- <cycle_day> <preference> <pain> <hunger> <exhaustion> [--allergy NAME]... [--dislike NAME]...

use cyclesync::data::{self, CsvRuleTables};
use cyclesync::diet::RecommendationEngine;
use cyclesync::models::{parse_integer, DietRequest, RawDietInput};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: suggest_diet <cycle_day> <preference> <pain> <hunger> <exhaustion> \
                     [--allergy NAME]... [--dislike NAME]...";

fn parse_args(args: &[String]) -> Result<RawDietInput, String> {
    if args.len() < 5 {
        return Err(USAGE.to_string());
    }

    let mut input = RawDietInput {
        cycle_day: parse_integer("cycle_day", &args[0]).map_err(|e| e.to_string())?,
        preference: args[1].clone(),
        pain: parse_integer("pain", &args[2]).map_err(|e| e.to_string())?,
        hunger: parse_integer("hunger", &args[3]).map_err(|e| e.to_string())?,
        exhaustion: parse_integer("exhaustion", &args[4]).map_err(|e| e.to_string())?,
        ..Default::default()
    };

    let mut rest = args[5..].iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .ok_or_else(|| format!("{} needs a food name\n{}", flag, USAGE))?;
        match flag.as_str() {
            "--allergy" => input.allergies.push(value.clone()),
            "--dislike" => input.dislikes.push(value.clone()),
            other => return Err(format!("Unknown option '{}'\n{}", other, USAGE)),
        }
    }

    Ok(input)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cyclesync=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = parse_args(&args)?;
    let request = DietRequest::from_raw(&input)?;

    let engine = RecommendationEngine::new(CsvRuleTables::new(data::get_data_dir()));
    let recommendation = engine.suggest_diet(&request);

    println!("Phase: {}", recommendation.phase.display_name());
    println!("{}", recommendation.summary());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positional_and_repeated_flags() {
        let input = parse_args(&args(&[
            "12", "veg", "3", "0", "7", "--allergy", "nuts", "--dislike", "tofu", "--allergy",
            "soy",
        ]))
        .unwrap();

        assert_eq!(input.cycle_day, 12);
        assert_eq!(input.preference, "veg");
        assert_eq!((input.pain, input.hunger, input.exhaustion), (3, 0, 7));
        assert_eq!(input.allergies, vec!["nuts", "soy"]);
        assert_eq!(input.dislikes, vec!["tofu"]);
    }

    #[test]
    fn test_too_few_arguments() {
        assert_eq!(parse_args(&args(&["12", "veg", "3"])).unwrap_err(), USAGE);
    }

    #[test]
    fn test_non_integer_positional() {
        let err = parse_args(&args(&["12", "veg", "a lot", "0", "0"])).unwrap_err();
        assert!(err.starts_with("pain must be an integer"));
    }

    #[test]
    fn test_flag_without_value() {
        let err = parse_args(&args(&["12", "veg", "0", "0", "0", "--dislike"])).unwrap_err();
        assert!(err.starts_with("--dislike needs a food name"));
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_args(&args(&["12", "veg", "0", "0", "0", "--avoid", "fish"])).unwrap_err();
        assert!(err.starts_with("Unknown option '--avoid'"));
    }
}
