use crate::commands::decode::decode_options;
use crate::error::{CliError, Result};
use crate::util::collect_inputs;
use crate::Context;
use clap::Args;
use crockford32::{decode, is_valid, normalize};

/// Arguments for `validate`.
#[derive(Args)]
pub struct ValidateArgs {
    /// Symbol strings to check (read from stdin when omitted)
    pub inputs: Vec<String>,

    /// Inputs end with a check symbol
    #[arg(long)]
    pub checksum: bool,

    /// Options as key=value pairs, e.g. "checksum"
    #[arg(long, value_name = "OPTIONS")]
    pub options: Option<String>,
}

/// Prints `valid`/`invalid` per input; fails if any input is invalid.
pub fn run(ctx: &Context, args: &ValidateArgs) -> Result<()> {
    let opts = decode_options(args.options.as_deref(), args.checksum)?;
    let inputs = collect_inputs(&args.inputs)?;

    let mut invalid = 0;
    for input in &inputs {
        let valid = is_valid(input, &opts);
        if valid {
            ctx.out.info_user(format!("{input}\tvalid"));
            if opts.checksum && decode::<u128>(input, &opts).is_none() {
                ctx.out.info_diag(format!("{input}: check symbol does not match"));
            }
        } else {
            invalid += 1;
            ctx.out.info_user(format!("{input}\tinvalid"));
            ctx.out
                .info_diag(format!("{input} -> {}", normalize(input, &opts)));
        }
    }

    if invalid > 0 {
        return Err(CliError::InvalidInputs {
            invalid,
            total: inputs.len(),
        });
    }
    Ok(())
}
