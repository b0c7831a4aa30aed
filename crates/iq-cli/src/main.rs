use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use iq_api::schema::Catalogue;
use iq_core::params::{CntParams, DoubleGateParams, MobilityParams, MosfetIvParams, RadiationParams};
use iq_core::{evaluate, ModeRequest};

mod render;

#[derive(Debug, Parser)]
#[command(name = "iq-cli", version, about = "IQ-MOS nanoscale device explorer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Print every plot sample instead of the first and last five
    #[arg(long, global = true)]
    all: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every mode with its inputs
    List,
    /// Drain current vs drain voltage
    #[command(allow_negative_numbers = true)]
    MosfetIv {
        /// Gate voltage [V]
        #[arg(long)]
        vg: Option<f64>,
        /// Oxide thickness [nm]
        #[arg(long)]
        tox: Option<f64>,
        /// Channel mobility [cm²/Vs]
        #[arg(long)]
        mobility: Option<f64>,
        /// Threshold voltage [V]
        #[arg(long)]
        vth: Option<f64>,
    },
    /// Double-gate threshold voltage
    #[command(allow_negative_numbers = true)]
    DoubleGate {
        /// Silicon body thickness [nm]
        #[arg(long)]
        thickness: Option<f64>,
        /// Oxide thickness [nm]
        #[arg(long)]
        tox: Option<f64>,
    },
    /// Nanotube diameter, bandgap and metallicity
    CntBandgap {
        /// First chirality index
        #[arg(short)]
        n: Option<u32>,
        /// Second chirality index
        #[arg(short)]
        m: Option<u32>,
    },
    /// Mobility vs lateral electric field
    #[command(allow_negative_numbers = true)]
    Mobility {
        /// Low-field mobility [cm²/Vs]
        #[arg(long)]
        mu0: Option<f64>,
    },
    /// Threshold shift vs total ionizing dose
    #[command(allow_negative_numbers = true)]
    Radiation {
        /// Total ionizing dose [krad]
        #[arg(long)]
        dose: Option<f64>,
    },
}

impl Command {
    /// Omitted values fall back to the slider defaults.
    fn request(&self) -> Option<ModeRequest> {
        let request = match *self {
            Command::List => return None,
            Command::MosfetIv {
                vg,
                tox,
                mobility,
                vth,
            } => {
                let d = MosfetIvParams::default();
                ModeRequest::MosfetIv(MosfetIvParams {
                    vg: vg.unwrap_or(d.vg),
                    tox_nm: tox.unwrap_or(d.tox_nm),
                    mobility_cm2: mobility.unwrap_or(d.mobility_cm2),
                    vth: vth.unwrap_or(d.vth),
                })
            }
            Command::DoubleGate { thickness, tox } => {
                let d = DoubleGateParams::default();
                ModeRequest::DoubleGate(DoubleGateParams {
                    thickness_nm: thickness.unwrap_or(d.thickness_nm),
                    tox_nm: tox.unwrap_or(d.tox_nm),
                })
            }
            Command::CntBandgap { n, m } => {
                let d = CntParams::default();
                ModeRequest::CntBandgap(CntParams {
                    n: n.unwrap_or(d.n),
                    m: m.unwrap_or(d.m),
                })
            }
            Command::Mobility { mu0 } => ModeRequest::Mobility(MobilityParams {
                mu0_cm2: mu0.unwrap_or(MobilityParams::default().mu0_cm2),
            }),
            Command::Radiation { dose } => ModeRequest::Radiation(RadiationParams {
                dose_krad: dose.unwrap_or(RadiationParams::default().dose_krad),
            }),
        };
        Some(request)
    }
}

fn main() {
    let cli = Cli::parse();
    iq_api::telemetry::init_tracing(&cli.log_level);

    let Some(request) = cli.command.request() else {
        let catalogue = Catalogue::new();
        match cli.format {
            Format::Text => print!("{}", render::render_catalogue(&catalogue)),
            Format::Json => print_json(&catalogue),
        }
        return;
    };

    debug!(?request, "evaluating");
    let report = match evaluate(&request) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}: {}", request.mode().slug(), err);
            std::process::exit(if err.is_input_error() { 2 } else { 1 });
        }
    };

    match cli.format {
        Format::Text => print!("{}", render::render_report(&report, cli.all)),
        Format::Json => print_json(&report),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("failed to encode json: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn omitted_values_take_defaults() {
        let cli = Cli::try_parse_from(["iq-cli", "mosfet-iv", "--vg", "1.8"]).unwrap();
        assert_eq!(
            cli.command.request(),
            Some(ModeRequest::MosfetIv(MosfetIvParams {
                vg: 1.8,
                ..MosfetIvParams::default()
            }))
        );
    }

    #[test]
    fn cnt_short_flags() {
        let cli = Cli::try_parse_from(["iq-cli", "cnt-bandgap", "-n", "10", "-m", "0"]).unwrap();
        assert_eq!(
            cli.command.request(),
            Some(ModeRequest::CntBandgap(CntParams { n: 10, m: 0 }))
        );
    }

    #[test]
    fn negative_dose_parses_then_fails_validation() {
        let cli = Cli::try_parse_from(["iq-cli", "radiation", "--dose", "-5"]).unwrap();
        let request = cli.command.request().unwrap();
        assert!(evaluate(&request).unwrap_err().is_input_error());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["iq-cli", "list", "--format", "json", "--all"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(cli.all);
        assert!(cli.command.request().is_none());
    }
}
