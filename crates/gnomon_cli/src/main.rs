use clap::{Parser, Subcommand};
use gnomon_angle::{deg_to_dms, format_degrees, to_degrees};
use gnomon_rs::{GeoLocation, SeriesConfig, SolarModel, julian, position};
use gnomon_solar::{EARTH_CIRCUMFERENCE_KM, EratosthenesSetup, gnomon_shadow_ratio};
use gnomon_time::{DayNumber, Timestamp, local_sidereal_hours, parse_timestamp};
use log::debug;

#[derive(Parser)]
#[command(name = "gnomon", about = "Low-order solar position calculator")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Continuous day count (days since J2000.0) of a timestamp
    Julian {
        /// Timestamp (YYYY-MM-DDTHH:mm:SS±HHMM)
        timestamp: String,
    },
    /// Timestamp for a continuous day count
    Calendar {
        /// Days since J2000.0
        #[arg(allow_hyphen_values = true)]
        days: f64,
        /// UTC offset for the printed wall clock (Z, ±HHMM or ±HH:MM)
        #[arg(long, default_value = "+0000", allow_hyphen_values = true)]
        offset: String,
    },
    /// Local mean sidereal time
    Sidereal {
        /// Timestamp (YYYY-MM-DDTHH:mm:SS±HHMM)
        timestamp: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lon: f64,
    },
    /// Full solar position for one observer and instant
    Position {
        /// Timestamp (YYYY-MM-DDTHH:mm:SS±HHMM)
        timestamp: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Decimal places in printed angles
        #[arg(long, default_value = "4")]
        precision: usize,
    },
    /// Elevation and azimuth sampled at a fixed step
    Series {
        /// Start timestamp (YYYY-MM-DDTHH:mm:SS±HHMM)
        timestamp: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Minutes between samples
        #[arg(long, default_value = "10")]
        step_min: i64,
        /// Number of samples
        #[arg(long, default_value = "75")]
        count: usize,
    },
    /// Estimate Earth's circumference from Syene and Alexandria at the solstice
    Eratosthenes,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Julian { timestamp } => {
            let jt = julian(&timestamp).unwrap_or_else(|e| fail(e));
            println!("{jt:.9}");
        }

        Commands::Calendar { days, offset } => {
            let offset_minutes = parse_offset(&offset).unwrap_or_else(|e| fail(e));
            println!("{}", calendar_line(days, offset_minutes));
        }

        Commands::Sidereal { timestamp, lon } => {
            let jt = DayNumber::parse(&timestamp)
                .unwrap_or_else(|e| fail(e))
                .days();
            let hours = local_sidereal_hours(jt, lon);
            let h = hours.floor();
            let m = ((hours - h) * 60.0).floor();
            let s = ((hours - h) * 60.0 - m) * 60.0;
            println!("LMST: {hours:.6} h ({h:02}h {m:02}m {s:05.2}s)");
        }

        Commands::Position {
            timestamp,
            lat,
            lon,
            precision,
        } => {
            let pos = position(&timestamp, lat, lon).unwrap_or_else(|e| fail(e));
            let p = precision;
            println!("Day count:          {:.9}", pos.jt);
            println!("Mean anomaly:       {} deg", format_degrees(pos.mean_anomaly, p));
            println!("Obliquity:          {} deg", format_degrees(pos.obliquity, p));
            println!(
                "Ecliptic longitude: {} deg",
                format_degrees(pos.ecliptic_longitude, p)
            );
            println!(
                "Right ascension:    {} deg",
                format_degrees(pos.right_ascension, p)
            );
            println!(
                "Declination:        {} deg ({})",
                format_degrees(pos.declination, p),
                deg_to_dms(to_degrees(pos.declination))
            );
            println!("Hour angle:         {} deg", format_degrees(pos.hour_angle, p));
            println!(
                "Elevation:          {} deg ({})",
                format_degrees(pos.elevation, p),
                deg_to_dms(pos.elevation_deg())
            );
            println!("Azimuth:            {} deg", format_degrees(pos.azimuth, p));
            match gnomon_shadow_ratio(pos.elevation) {
                Some(ratio) => println!("Shadow/gnomon:      {ratio:.p$}"),
                None => println!("Shadow/gnomon:      (sun below horizon)"),
            }
        }

        Commands::Series {
            timestamp,
            lat,
            lon,
            step_min,
            count,
        } => {
            let location = GeoLocation::try_new(lat, lon).unwrap_or_else(|e| fail(e));
            let start_ms = parse_timestamp(&timestamp).unwrap_or_else(|e| fail(e));
            let offset_minutes = timestamp
                .parse::<Timestamp>()
                .map(|t| t.offset_minutes)
                .unwrap_or(0);
            let config = SeriesConfig {
                start_ms,
                step_ms: step_min.saturating_mul(60_000),
                count,
            };
            let samples = SolarModel::STANDARD
                .series(&config, &location)
                .unwrap_or_else(|e| fail(e));
            println!("{:<26} {:>10} {:>10}", "Time", "Elev(deg)", "Az(deg)");
            for s in samples {
                println!(
                    "{:<26} {:>10.2} {:>10.2}",
                    Timestamp::from_epoch_ms(s.epoch_ms, offset_minutes).to_string(),
                    to_degrees(s.elevation),
                    to_degrees(s.azimuth)
                );
            }
        }

        Commands::Eratosthenes => {
            let setup = EratosthenesSetup::classic();
            debug!("eratosthenes setup: {setup:?}");
            let est = SolarModel::STANDARD
                .estimate_circumference(&setup)
                .unwrap_or_else(|e| fail(e));
            println!("Syene elevation:      {:.3} deg", to_degrees(est.elevation_a));
            println!("Alexandria elevation: {:.3} deg", to_degrees(est.elevation_b));
            println!("Alexandria shadow:    {}", shadow_line(est.elevation_b));
            println!("Difference:           {:.3} deg", to_degrees(est.difference));
            println!("Baseline:             {:.3} km", setup.baseline_km);
            println!("Estimated:            {:.0} km", est.circumference_km);
            println!("Actual:               {EARTH_CIRCUMFERENCE_KM:.0} km");
            println!("Error:                {:.2}%", est.error_pct);
        }
    }
}

/// Wall-clock reading for a day count. Instants past the `i64` range pin to
/// its ends.
fn calendar_line(days: f64, offset_minutes: i32) -> String {
    let ms = DayNumber::from_days(days).as_epoch_ms();
    Timestamp::from_epoch_ms(ms, offset_minutes).to_string()
}

/// Shadow cast by a one-metre gnomon, for display.
fn shadow_line(elevation: f64) -> String {
    match gnomon_shadow_ratio(elevation) {
        Some(m) => format!("{m:.2} m (1 m gnomon)"),
        None => "none (sun below horizon)".to_string(),
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

/// Parse `Z`, `±HHMM` or `±HH:MM` into minutes east of UTC.
fn parse_offset(s: &str) -> Result<i32, String> {
    if s == "Z" {
        return Ok(0);
    }
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(format!("invalid offset {s}: expected Z, ±HHMM or ±HH:MM")),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid offset {s}: expected Z, ±HHMM or ±HH:MM"));
    }
    let hours: i32 = digits[..2].parse().map_err(|e| format!("{e}"))?;
    let minutes: i32 = digits[2..].parse().map_err(|e| format!("{e}"))?;
    if hours > 23 || minutes > 59 {
        return Err(format!("offset out of range: {s}"));
    }
    Ok(sign * (hours * 60 + minutes))
}
