pub mod commands;

use crate::interfaces::occasion_bundles::{OccasionBundleQuery, OccasionBundlesRequest};
use crate::interfaces::search_information::SearchInformationRequest;
use crate::interfaces::BookingSession;
use crate::output::OutputFormat;
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search driving exam occasions", long_about = None)]
pub struct Cli {
    /// Output format: wide, json or yaml
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Log requests and responses
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.output.as_deref().unwrap_or_default())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List licence categories, exam locations or exam occasions
    #[command(subcommand)]
    List(ListCommand),
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// List licence categories
    #[command(name = "licenceCategories", aliases = ["licenseCategories", "lc"])]
    LicenceCategories,

    /// List exam locations
    #[command(alias = "l")]
    Locations(SessionArgs),

    /// List exam occasions
    #[command(alias = "o")]
    Occasions(OccasionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// (Required) Social security number
    #[arg(short = 'S', long)]
    pub social_security_number: Option<String>,

    /// (Optional) Licence ID/type
    #[arg(short = 't', long, default_value_t = 5)]
    pub licence_id: u64,

    /// (Optional) Booking mode ID/type
    #[arg(short = 'B', long, default_value_t = 0)]
    pub booking_mode_id: u64,

    /// (Optional) Ignore debt
    #[arg(short = 'I', long)]
    pub ignore_debt: bool,

    /// (Optional) Examination ID/type
    #[arg(short = 'E', long, default_value_t = 0)]
    pub examination_type_id: u64,
}

#[derive(Args, Debug, Clone)]
pub struct OccasionArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// (Optional) Start date, RFC 3339, e.g. 2024-05-01T08:00:00+02:00.
    /// When omitted the current time is sent as the start date.
    /// Dates that don't parse are rejected.
    #[arg(short = 'D', long, value_parser = parse_start_date)]
    pub start_date: Option<DateTime<FixedOffset>>,

    /// (Required) Location ID
    #[arg(short = 'L', long, default_value_t = 0)]
    pub location_id: u64,

    /// (Optional) Language ID
    #[arg(short = 'l', long, default_value_t = 13)]
    pub language_id: u64,

    /// (Optional) Vehicle type ID
    #[arg(short = 'V', long, default_value_t = 1)]
    pub vehicle_type_id: u64,

    /// (Optional) Tachograph type ID
    #[arg(short = 'T', long, default_value_t = 1)]
    pub tachograph_type_id: u64,

    /// (Optional) Occasion choice ID
    #[arg(short = 'O', long, default_value_t = 1)]
    pub occasion_choice_id: u64,
}

/// Required flags that were not given. Nothing is sent when this is returned.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{} required!", .0.join(", "))]
pub struct MissingInput(pub Vec<&'static str>);

fn parse_start_date(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}

impl SessionArgs {
    fn missing(&self) -> Vec<&'static str> {
        match self.social_security_number.as_deref() {
            None | Some("") => vec!["--social-security-number/-S"],
            Some(_) => vec![],
        }
    }

    fn to_booking_session(&self) -> BookingSession {
        BookingSession {
            social_security_number: self.social_security_number.clone().unwrap_or_default(),
            licence_id: self.licence_id,
            booking_mode_id: self.booking_mode_id,
            ignore_debt: self.ignore_debt,
            examination_type_id: self.examination_type_id,
        }
    }

    pub fn search_information_request(&self) -> Result<SearchInformationRequest, MissingInput> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(MissingInput(missing));
        }

        Ok(SearchInformationRequest {
            booking_session: self.to_booking_session(),
        })
    }
}

impl OccasionArgs {
    pub fn occasion_bundles_request(&self) -> Result<OccasionBundlesRequest, MissingInput> {
        let mut missing = self.session.missing();
        if self.location_id == 0 {
            missing.push("--location-id/-L");
        }
        if !missing.is_empty() {
            return Err(MissingInput(missing));
        }

        Ok(OccasionBundlesRequest {
            booking_session: self.session.to_booking_session(),
            occasion_bundle_query: OccasionBundleQuery {
                start_date: self.start_date.unwrap_or_else(|| Utc::now().into()),
                location_id: self.location_id,
                language_id: self.language_id,
                vehicle_type_id: self.vehicle_type_id,
                tachograph_type_id: self.tachograph_type_id,
                occasion_choice_id: self.occasion_choice_id,
                examination_type_id: self.session.examination_type_id,
            },
        })
    }
}
