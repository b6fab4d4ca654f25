// Voice normalizer CLI
//
// Usage:
//   voice-normalizer [--config <path>] [--trace] [utterance...]
//
// Without an utterance every stdin line is normalized. One JSON object per
// utterance is printed: the chat payload, or the full result with --trace.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use voice_normalizer_lib::{NormalizerConfig, VnlEngine};

struct Args {
    config: Option<PathBuf>,
    trace: bool,
    utterance: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        trace: false,
        utterance: Vec::new(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
                args.config = Some(PathBuf::from(path));
            }
            "--trace" => args.trace = true,
            "-h" | "--help" => {
                println!("usage: voice-normalizer [--config <path>] [--trace] [utterance...]");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {}", flag),
            _ => args.utterance.push(arg),
        }
    }

    Ok(args)
}

fn emit(engine: &VnlEngine, raw: &str, trace: bool, out: &mut impl Write) -> Result<()> {
    let result = engine.normalize(raw);
    let line = if trace {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string(&result.to_chat_payload())?
    };
    writeln!(out, "{}", line)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => NormalizerConfig::load_from(path)?,
        None => NormalizerConfig::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {}", e);
            NormalizerConfig::default()
        }),
    };
    let engine = VnlEngine::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.utterance.is_empty() {
        return emit(&engine, &args.utterance.join(" "), args.trace, &mut out);
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        emit(&engine, &line, args.trace, &mut out)?;
    }

    Ok(())
}
