use colored::{Color, Colorize};

use crate::types::env::Registration;

pub struct Utils;

impl Utils {
    /// Print a one-line status for a registration. Output only; nothing
    /// downstream reads it back.
    pub fn print_registration(registration: &Registration, quiet: bool) {
        if quiet {
            return;
        }
        match registration {
            Registration::Library { names } => {
                println!("{}", format!("+ {}", names.join(" ")).color(Color::Green));
            }
            Registration::PackagePath { package } => {
                println!("{}", format!("~ {} (pkg path)", package).color(Color::Cyan));
            }
            Registration::PackageDeps { package } => {
                println!("{}", format!("> {} (deps)", package).color(Color::Blue));
            }
        }
    }

    pub fn print_registrations(registrations: &[Registration], quiet: bool) {
        for registration in registrations {
            Self::print_registration(registration, quiet);
        }
    }
}
