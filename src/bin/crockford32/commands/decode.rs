use crate::error::{CliError, Result};
use crate::util::collect_inputs;
use crate::Context;
use clap::Args;
use crockford32::{decode, normalize, DecodeOptions};

/// Arguments for `decode`.
#[derive(Args)]
pub struct DecodeArgs {
    /// Symbol strings to decode (read from stdin when omitted)
    pub inputs: Vec<String>,

    /// Inputs end with a check symbol
    #[arg(long)]
    pub checksum: bool,

    /// Options as key=value pairs, e.g. "checksum"
    #[arg(long, value_name = "OPTIONS")]
    pub options: Option<String>,
}

/// Merges `--options` with the `--checksum` flag.
pub fn decode_options(options: Option<&str>, checksum: bool) -> Result<DecodeOptions> {
    let opts = match options {
        Some(raw) => raw.parse::<DecodeOptions>()?,
        None => DecodeOptions::new(),
    };
    Ok(if checksum { opts.with_checksum(true) } else { opts })
}

/// Decodes each input; stops at the first malformed one.
pub fn run(ctx: &Context, args: &DecodeArgs) -> Result<()> {
    let opts = decode_options(args.options.as_deref(), args.checksum)?;

    for input in collect_inputs(&args.inputs)? {
        ctx.out
            .info_diag(format!("{input} -> {}", normalize(&input, &opts)));
        let value = decode::<u128>(&input, &opts)
            .ok_or_else(|| CliError::MalformedInput(input.clone()))?;
        ctx.out.result(value);
    }
    Ok(())
}
