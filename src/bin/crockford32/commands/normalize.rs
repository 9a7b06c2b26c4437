use crate::commands::decode::decode_options;
use crate::error::Result;
use crate::util::collect_inputs;
use crate::Context;
use clap::Args;
use crockford32::normalize;

/// Arguments for `normalize`.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Symbol strings to normalize (read from stdin when omitted)
    pub inputs: Vec<String>,

    /// Keep the trailing check symbol as-is
    #[arg(long)]
    pub checksum: bool,

    /// Options as key=value pairs, e.g. "checksum"
    #[arg(long, value_name = "OPTIONS")]
    pub options: Option<String>,
}

/// Prints the canonical form of each input.
pub fn run(ctx: &Context, args: &NormalizeArgs) -> Result<()> {
    let opts = decode_options(args.options.as_deref(), args.checksum)?;
    for input in collect_inputs(&args.inputs)? {
        ctx.out.result(normalize(&input, &opts));
    }
    Ok(())
}
