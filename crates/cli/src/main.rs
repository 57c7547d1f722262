mod collaborators;
mod commands;

use std::fs;
use std::io::{self, Read};

use anyhow::Context;

use boxoffice_ticketing::{PurchaseRequest, TicketService};
use collaborators::{LoggingPaymentService, LoggingSeatReservationService};
use commands::CommandLine;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    boxoffice_observability::init_with(&commands.log_config());

    let request = read_request(&commands)?;
    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);

    let receipt = service
        .purchase_tickets(&request)
        .context("ticket purchase failed")?;

    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

fn read_request(commands: &CommandLine) -> anyhow::Result<PurchaseRequest> {
    let raw = if commands.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read purchase request from stdin")?;
        buf
    } else {
        fs::read_to_string(&commands.request).with_context(|| {
            format!(
                "failed to read purchase request from {}",
                commands.request.display()
            )
        })?
    };

    parse_request(&raw)
}

fn parse_request(raw: &str) -> anyhow::Result<PurchaseRequest> {
    serde_json::from_str(raw).context("purchase request is not valid JSON")
}
