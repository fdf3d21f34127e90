//! Command-line front end for the dice RNG engine
//!
//! ```text
//! dice-rng roll <count> <sides> [--seed <text>] [--each]
//! dice-rng sample <n> [--seed <text>]
//! dice-rng shuffle [--seed <text>] <item>...
//! dice-rng save <file> [--seed <text>] [--advance <n>]
//! dice-rng resume <file> <n>
//! dice-rng config <file.json> <n>
//! ```
//!
//! Set `RUST_LOG=debug` to see seeding and state-load events.

use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::process;

use dice_rng_core_rs::{Dice, GeneratorConfig, RngError, RngManager};

/// Positional arguments plus the flags every subcommand understands
struct Args {
    positional: Vec<String>,
    seed: Option<String>,
    advance: usize,
    each: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = env::args().collect();
    if argv.len() < 2 {
        print_usage(&argv[0]);
        process::exit(1);
    }

    let args = match parse_args(&argv[2..]) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    let result = match argv[1].as_str() {
        "roll" => roll_command(&args),
        "sample" => sample_command(&args),
        "shuffle" => shuffle_command(&args),
        "save" => save_command(&args),
        "resume" => resume_command(&args),
        "config" => config_command(&args),
        other => {
            eprintln!("Error: unknown command '{}'", other);
            print_usage(&argv[0]);
            process::exit(1);
        }
    };

    if let Err(msg) = result {
        eprintln!("Error: {}", msg);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} roll <count> <sides> [--seed <text>] [--each]", program);
    eprintln!("  {} sample <n> [--seed <text>]", program);
    eprintln!("  {} shuffle [--seed <text>] <item>...", program);
    eprintln!("  {} save <file> [--seed <text>] [--advance <n>]", program);
    eprintln!("  {} resume <file> <n>", program);
    eprintln!("  {} config <file.json> <n>", program);
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args {
        positional: Vec::new(),
        seed: None,
        advance: 0,
        each: false,
    };

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                args.seed = Some(value.clone());
            }
            "--advance" => {
                let value = iter.next().ok_or("--advance requires a value")?;
                args.advance = parse_number(value, "--advance")?;
            }
            "--each" => args.each = true,
            _ => args.positional.push(arg.clone()),
        }
    }

    Ok(args)
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("invalid value '{}' for {}", text, what))
}

fn positional<'a>(args: &'a Args, index: usize, what: &str) -> Result<&'a str, String> {
    args.positional
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("missing <{}>", what))
}

fn build_rng(args: &Args) -> RngManager {
    let rng = match &args.seed {
        Some(text) => RngManager::from_seed_text(text),
        None => RngManager::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "generator ready");
    rng
}

fn engine_error(err: RngError) -> String {
    err.to_string()
}

fn print_samples(rng: &mut RngManager, n: usize) {
    for _ in 0..n {
        println!("{}", rng.next_sample());
    }
}

fn roll_command(args: &Args) -> Result<(), String> {
    let count = parse_number(positional(args, 0, "count")?, "count")?;
    let sides = parse_number(positional(args, 1, "sides")?, "sides")?;
    let dice = Dice::new(count, sides);
    let mut rng = build_rng(args);

    if args.each {
        let rolls = dice.roll_each(&mut rng).map_err(engine_error)?;
        let total: i64 = rolls.iter().map(|r| *r as i64).sum();
        let faces: Vec<String> = rolls.iter().map(i32::to_string).collect();
        println!("{}: [{}] = {}", dice, faces.join(", "), total);
    } else {
        let total = dice.roll(&mut rng).map_err(engine_error)?;
        println!("{}: {}", dice, total);
    }
    Ok(())
}

fn sample_command(args: &Args) -> Result<(), String> {
    let n = parse_number(positional(args, 0, "n")?, "n")?;
    let mut rng = build_rng(args);
    print_samples(&mut rng, n);
    Ok(())
}

fn shuffle_command(args: &Args) -> Result<(), String> {
    if args.positional.is_empty() {
        return Err("shuffle needs at least one item".to_string());
    }
    let mut items = args.positional.clone();
    let mut rng = build_rng(args);
    rng.shuffle(&mut items);
    println!("{}", items.join(" "));
    Ok(())
}

fn save_command(args: &Args) -> Result<(), String> {
    let path = positional(args, 0, "file")?;
    let mut rng = build_rng(args);
    for _ in 0..args.advance {
        rng.next_sample();
    }

    let file = File::create(path).map_err(|e| format!("cannot create {}: {}", path, e))?;
    rng.write_state(BufWriter::new(file)).map_err(engine_error)?;
    tracing::info!(path, advanced = args.advance, "state saved");
    Ok(())
}

fn resume_command(args: &Args) -> Result<(), String> {
    let path = positional(args, 0, "file")?;
    let n = parse_number(positional(args, 1, "n")?, "n")?;

    let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?;
    let mut rng = RngManager::new(0);
    rng.read_state(BufReader::new(file)).map_err(engine_error)?;
    tracing::info!(path, seed = rng.seed(), "state loaded");

    print_samples(&mut rng, n);
    Ok(())
}

fn config_command(args: &Args) -> Result<(), String> {
    let path = positional(args, 0, "file.json")?;
    let n = parse_number(positional(args, 1, "n")?, "n")?;

    let json = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    let config = GeneratorConfig::from_json(&json).map_err(engine_error)?;
    let mut rng = config.build();
    tracing::info!(seed = rng.seed(), "generator built from config");

    print_samples(&mut rng, n);
    Ok(())
}
