// certgate CLI - certificate hashing and quorum arithmetic

use certgate::certificate::{CertificateBuilder, CertificateCodec, Institution, Person};
use certgate::gateway::majority;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "certgate", about = "Validator-governed certificate registry tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the canonical content hash of a certificate
    Hash {
        #[arg(long)]
        certificate_id: String,
        #[arg(long)]
        person_id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long, default_value = "")]
        middle_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        country: String,
    },
    /// Print the strict-majority quorum for a validator count
    Quorum {
        validators: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Hash {
            certificate_id,
            person_id,
            first_name,
            middle_name,
            last_name,
            institution,
            country,
        } => {
            let cert = CertificateBuilder::new()
                .certificate_id(certificate_id)
                .person(Person::new(person_id, first_name, middle_name, last_name))
                .institution(Institution::new(institution, country))
                .build();
            match cert {
                Ok(cert) => println!("{}", CertificateCodec::hash(&cert).to_hex()),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Quorum { validators } => {
            println!("{}", majority(validators));
        }
    }
}
