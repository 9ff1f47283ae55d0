use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use orbit_astro::calendar::{parse_date, parse_time};
use orbit_astro::daily::daily_horoscope;
use orbit_astro::lunar::moon_phase_for_day;
use orbit_astro::{
    AstroEngine, BirthInput, DeterministicAstroEngine, PartnerProfile, Rulership, Sign, UserProfile,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic chart readings as JSON")]
struct Cli {
    /// Config file (default: configs/orbit.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rulership scheme for profection lords, overriding config.
    #[arg(long, global = true)]
    rulership: Option<Rulership>,

    /// Single-line JSON regardless of config.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct BirthArgs {
    /// Date of birth, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    dob: NaiveDate,

    /// Birth time, HH:MM or HH:MM:SS.
    #[arg(long, value_parser = parse_time)]
    time: Option<NaiveTime>,

    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// IANA timezone name, e.g. America/New_York.
    #[arg(long)]
    tz: Option<String>,
}

impl From<BirthArgs> for BirthInput {
    fn from(args: BirthArgs) -> Self {
        BirthInput {
            dob: args.dob,
            birth_time: args.time,
            lat: args.lat,
            lng: args.lng,
            timezone: args.tz,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Natal placements, ascendant and aspects.
    Origin {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Profection year containing a reference date.
    Yearly {
        #[command(flatten)]
        birth: BirthArgs,

        /// Reference date (default: today).
        #[arg(long, value_parser = parse_date)]
        on: Option<NaiveDate>,
    },
    /// Six-dimension compatibility reading.
    Between {
        /// Your first name.
        #[arg(long, default_value = "You")]
        name: String,

        #[command(flatten)]
        birth: BirthArgs,

        #[arg(long)]
        partner_name: Option<String>,

        #[arg(long, value_parser = parse_date)]
        partner_dob: Option<NaiveDate>,

        #[arg(long, value_parser = parse_time, requires = "partner_dob")]
        partner_time: Option<NaiveTime>,

        #[arg(long, allow_hyphen_values = true, requires = "partner_dob")]
        partner_lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "partner_dob")]
        partner_lng: Option<f64>,

        #[arg(long, requires = "partner_dob")]
        partner_tz: Option<String>,

        /// Known partner sign when there is no date of birth.
        #[arg(long)]
        partner_sign: Option<Sign>,
    },
    /// Moon phase window for a day.
    Moon {
        #[arg(long, value_parser = parse_date)]
        on: Option<NaiveDate>,
    },
    /// Fallback daily horoscope for a sign or a date of birth.
    Daily {
        #[arg(long)]
        sign: Option<Sign>,

        #[arg(long, value_parser = parse_date)]
        dob: Option<NaiveDate>,

        #[arg(long, value_parser = parse_date)]
        on: Option<NaiveDate>,
    },
    /// Cache key for a birth record.
    Signature {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize reading")?;
    println!("{}", text);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = orbit_config::load_config(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_filter.as_str()),
    )
    .init();

    let pretty = config.output.pretty && !cli.compact;
    let mut settings = config.engine;
    if let Some(rulership) = cli.rulership {
        settings.rulership = rulership;
    }
    let engine = DeterministicAstroEngine::new(settings);

    match cli.command {
        Command::Origin { birth } => {
            let birth = BirthInput::from(birth);
            emit(&engine.origin_chart(&birth), pretty)
        }
        Command::Yearly { birth, on } => {
            let birth = BirthInput::from(birth);
            let reference = on.unwrap_or_else(today);
            let chart = engine
                .yearly_chart(&birth, reference)
                .with_context(|| format!("Failed to compute yearly chart for {reference}"))?;
            emit(&chart, pretty)
        }
        Command::Between {
            name,
            birth,
            partner_name,
            partner_dob,
            partner_time,
            partner_lat,
            partner_lng,
            partner_tz,
            partner_sign,
        } => {
            let user = UserProfile::new(name, BirthInput::from(birth));
            let partner = match (&partner_name, partner_dob, partner_sign) {
                (Some(name), Some(dob), sign) => Some(PartnerProfile {
                    name: name.clone(),
                    birth: Some(BirthInput {
                        dob,
                        birth_time: partner_time,
                        lat: partner_lat,
                        lng: partner_lng,
                        timezone: partner_tz,
                    }),
                    sun_sign: sign,
                }),
                (Some(name), None, Some(sign)) => Some(PartnerProfile::named(name.clone()).with_sign(sign)),
                (None, Some(_), _) | (None, None, Some(_)) => {
                    anyhow::bail!("--partner-name is required with --partner-dob or --partner-sign")
                }
                _ => None,
            };
            let reading = engine.between_us(&user, partner.as_ref(), partner_name.as_deref());
            emit(&reading, pretty)
        }
        Command::Moon { on } => emit(&moon_phase_for_day(on.unwrap_or_else(today)), pretty),
        Command::Daily { sign, dob, on } => {
            let sign = match (sign, dob) {
                (Some(sign), _) => sign,
                (None, Some(dob)) => BirthInput::date_only(dob).sun_sign(),
                (None, None) => anyhow::bail!("daily needs --sign or --dob"),
            };
            emit(&daily_horoscope(sign, on.unwrap_or_else(today)), pretty)
        }
        Command::Signature { birth } => {
            let birth = BirthInput::from(birth);
            log::info!("precision: {:?}", birth.precision());
            println!("{}", birth.signature());
            Ok(())
        }
    }
}
