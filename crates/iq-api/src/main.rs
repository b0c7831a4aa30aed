use clap::Parser;

use iq_api::http::HttpServerConfig;

#[derive(Debug, Parser)]
#[command(name = "iq-api", version, about = "HTTP front end for the IQ-MOS device explorer")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    iq_api::telemetry::init_tracing(&args.log_level);

    let config = HttpServerConfig {
        bind_addr: args.addr,
    };
    if let Err(err) = iq_api::http::run(config).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
