use crate::error::Result;
use crate::util::{collect_inputs, parse_number, Number};
use crate::Context;
use clap::Args;
use crockford32::{encode, EncodeOptions};

/// Arguments for `encode`.
#[derive(Args)]
pub struct EncodeArgs {
    /// Integers to encode (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Minimum width, zero-padded (hyphens not counted)
    #[arg(long)]
    pub length: Option<usize>,

    /// Insert a hyphen every N symbols, counted from the right
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub split: Option<u64>,

    /// Append a mod-37 check symbol
    #[arg(long)]
    pub checksum: bool,

    /// Options as key=value pairs, e.g. "length=8,split=4,checksum"
    #[arg(long, value_name = "OPTIONS")]
    pub options: Option<String>,
}

impl EncodeArgs {
    /// Merges `--options` with the typed flags; flags win.
    fn encode_options(&self) -> Result<EncodeOptions> {
        let mut opts = match &self.options {
            Some(raw) => raw.parse::<EncodeOptions>()?,
            None => EncodeOptions::new(),
        };
        if let Some(length) = self.length {
            opts = opts.with_length(length);
        }
        if let Some(split) = self.split {
            opts = opts.with_split(usize::try_from(split).unwrap_or(usize::MAX));
        }
        if self.checksum {
            opts = opts.with_checksum(true);
        }
        Ok(opts)
    }
}

/// Encodes each operand and prints one symbol string per line.
pub fn run(ctx: &Context, args: &EncodeArgs) -> Result<()> {
    let opts = args.encode_options()?;
    ctx.out.info_diag(format!("options: {opts:?}"));

    for input in collect_inputs(&args.numbers)? {
        let encoded = match parse_number(&input)? {
            Number::Unsigned(value) => encode(value, &opts)?,
            Number::Signed(value) => encode(value, &opts)?,
        };
        ctx.out.result(encoded);
    }
    Ok(())
}
