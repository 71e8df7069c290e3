use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "flashname")]
#[command(version)]
#[command(about = "Print the USB BIOS Flashback filename stored in a firmware capsule", long_about = None)]
#[command(after_help = "Examples:\n  \
  flashname PRIME-X570-PRO-ASUS-4021.CAP           print the name to copy the capsule as\n  \
  flashname -v https://example.com/bios/X570.CAP   download, then show offsets while parsing")]
pub struct Cli {
    /// Capsule (.CAP) file path or HTTP URL
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Log parsing details to stderr (-vv for more)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(self.log_level().into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}
