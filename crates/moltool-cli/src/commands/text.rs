use std::io::Read;

use chrono::{DateTime, TimeZone, Utc};
use moltool_core::format::{
    create_csv_string, srounded, srounded_string, string_with_space, RoundOption,
};
use moltool_core::molecule::depth_label;
use moltool_core::time::{display_time, UnixTimeExt};
use moltool_core::MolToolError;

use crate::cli::{CsvArgs, DepthArgs, NowArgs, PadArgs, RoundArgs, StampArgs};
use crate::config::{parse_timezone, MolToolConfig};

type JsonRow = serde_json::Map<String, serde_json::Value>;

pub fn handle_csv(args: &CsvArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let contents = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            buffer
        }
    };
    let rows = parse_rows(&contents)?;
    let nil = args.nil.as_deref().unwrap_or(&config.output.nil_string);
    print!("{}", create_csv_string(&args.header, &rows, nil));
    Ok(())
}

fn parse_rows(contents: &str) -> Result<Vec<JsonRow>, MolToolError> {
    let rows: Vec<JsonRow> = serde_json::from_str(contents)?;
    Ok(rows)
}

pub fn handle_round(args: &RoundArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let option: RoundOption = args.option.parse()?;
    let digits = args.digits.unwrap_or(config.output.digits);
    match args.values.as_slice() {
        [single] => println!("{}", srounded(*single, digits, option)),
        values => println!("{}", srounded_string(values, digits, option)),
    }
    Ok(())
}

pub fn handle_pad(args: &PadArgs) -> anyhow::Result<()> {
    println!("{}", string_with_space(&args.text, args.width, !args.leading));
    Ok(())
}

pub fn handle_stamp(args: &StampArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let time = match args.at {
        Some(epoch) => epoch_time(epoch)?,
        None => Utc::now(),
    };
    let separator = args
        .separator
        .as_deref()
        .unwrap_or(&config.output.timestamp_separator);
    println!("{}", args.text.appended_unix_time(&time, separator));
    Ok(())
}

fn epoch_time(epoch: i64) -> Result<DateTime<Utc>, MolToolError> {
    Utc.timestamp_opt(epoch, 0)
        .single()
        .ok_or_else(|| MolToolError::InvalidInput(format!("Unix time out of range: {}", epoch)))
}

pub fn handle_now(args: &NowArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let tz = match &args.timezone {
        Some(name) => parse_timezone(name)?,
        None => config.timezone()?,
    };
    println!("{}", display_time(&Utc::now(), tz));
    Ok(())
}

pub fn handle_depth(args: &DepthArgs) -> anyhow::Result<()> {
    println!("{}", depth_label(args.depth));
    Ok(())
}
