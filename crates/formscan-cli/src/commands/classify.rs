//! Classify command - show the inferred type of text.

use clap::Args;
use serde::Serialize;

use formscan_core::fields::rules::classify;
use formscan_core::fields::split_key_value;
use formscan_core::models::types::TypeInfo;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(required = true)]
    text: Vec<String>,

    /// Treat each argument as a form line and classify its value
    #[arg(long)]
    line: bool,

    /// Print one JSON object per line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Classified<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    text: &'a str,
    #[serde(flatten)]
    info: TypeInfo,
}

pub async fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    for text in &args.text {
        let (key, value) = if args.line {
            let (key, value, _) = split_key_value(text);
            (Some(key), value)
        } else {
            (None, text.clone())
        };
        let info = classify(&value);

        if args.json {
            let classified = Classified {
                key,
                text: &value,
                info,
            };
            println!("{}", serde_json::to_string(&classified)?);
        } else if let Some(key) = key {
            println!("{:?}\t{:?}\t{}\t{}", key, value, info.type_name(), info.pattern());
        } else {
            println!("{:?}\t{}\t{}", value, info.type_name(), info.pattern());
        }
    }

    Ok(())
}
