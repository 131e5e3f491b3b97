use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use serde_json::json;
use udaya_config::UdayaConfig;
use udaya_engine::{
    AnalyticEphemeris, AnalyticSunTimes, ChartEngine, ChartSnapshot, DayBoundary,
    EphemerisProvider, QueryMoment, SpecialPointAggregator, SuppliedLongitude,
    UdayaLagnaInterpolator, VedicDay, VedicDayResolver, day_lord,
};
use udaya_time::parse_local;
use udaya_vedic_base::{AyanamshaSystem, classify};

#[derive(Parser)]
#[command(name = "udaya", about = "Vedic day, day lord and special-point calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// TOML config file with location, ayanamsha and horizon settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Latitude in degrees, north positive
    #[arg(long = "lat", global = true, allow_negative_numbers = true)]
    latitude: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long = "lon", global = true, allow_negative_numbers = true)]
    longitude: Option<f64>,
    /// UTC offset of the local clock in hours (e.g. 5.5)
    #[arg(long = "tz", global = true, allow_negative_numbers = true)]
    tz_offset_hours: Option<f64>,
    /// Altitude above sea level in meters
    #[arg(long = "alt", global = true)]
    altitude_m: Option<f64>,
    /// Ayanamsha system (lahiri, kp, raman, fagan-bradley, ...)
    #[arg(long, global = true)]
    ayanamsha: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi, degree, nakshatra and pada of a sidereal longitude
    Classify {
        /// Sidereal ecliptic longitude in degrees
        #[arg(value_name = "LON", allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Vedic (sunrise-to-sunrise) day containing a local moment
    VedicDay {
        /// Local datetime (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Weekday lord of a local moment
    DayLord {
        /// Local datetime (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Day boundary: sunrise or fixed-clock (06:00)
        #[arg(long, default_value = "sunrise")]
        convention: String,
    },
    /// Udayam (Udaya Lagna) at a local moment
    Udayam {
        /// Local datetime (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Sidereal Sun longitude; computed analytically when omitted
        #[arg(long)]
        sun_lon: Option<f64>,
    },
    /// Aarudam, Udayam and Kavippu at a local moment
    Points {
        /// Local datetime (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Aarudam longitude in degrees
        #[arg(long)]
        aarudam: Option<f64>,
        /// Kavippu longitude in degrees
        #[arg(long)]
        kavippu: Option<f64>,
    },
    /// Birth chart and, optionally, an independent query (horary) chart
    Chart {
        /// Birth local datetime (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Query local datetime for the horary chart
        #[arg(long)]
        query_date: Option<String>,
        /// Aarudam longitude in degrees
        #[arg(long)]
        aarudam: Option<f64>,
        /// Kavippu longitude in degrees
        #[arg(long)]
        kavippu: Option<f64>,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> UdayaConfig {
    let mut config = match &cli.config {
        Some(path) => udaya_config::load(path).unwrap_or_else(|e| fail(e)),
        None => UdayaConfig::default(),
    };
    if let Some(lat) = cli.latitude {
        config.location.latitude_deg = lat;
    }
    if let Some(lon) = cli.longitude {
        config.location.longitude_deg = lon;
    }
    if let Some(alt) = cli.altitude_m {
        config.location.altitude_m = alt;
    }
    if let Some(tz) = cli.tz_offset_hours {
        config.tz_offset_hours = tz;
    }
    if let Some(name) = &cli.ayanamsha {
        config.ayanamsha = name
            .parse::<AyanamshaSystem>()
            .unwrap_or_else(|e| fail(e));
    }
    config.validate().unwrap_or_else(|e| fail(e));
    debug!("effective config: {config:?}");
    config
}

fn parse_date(s: &str) -> NaiveDateTime {
    parse_local(s).unwrap_or_else(|e| fail(format!("{e}; expected YYYY-MM-DDThh:mm[:ss]")))
}

fn query_moment(config: &UdayaConfig, date: &str) -> QueryMoment {
    QueryMoment::new(parse_date(date), config.location, config.tz_offset_hours)
        .unwrap_or_else(|e| fail(e))
}

fn supplied(flag: Option<f64>, configured: Option<f64>, name: &str) -> SuppliedLongitude {
    match flag.or(configured) {
        Some(lon) => SuppliedLongitude(lon),
        None => fail(format!(
            "{name} longitude required (--{name} or [special_points] {name} in the config)"
        )),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_vedic_day(day: &VedicDay) {
    let t = &day.triad;
    println!("Vedic day:    {}", day.date);
    println!("Civil date:   {}", day.civil_date);
    println!("Sunrise:      {}", t.sunrise());
    println!("Sunset:       {}", t.sunset());
    println!("Next sunrise: {}", t.next_sunrise());
    println!(
        "Day length:   {:.4} h, night length: {:.4} h",
        day.day_length().num_seconds() as f64 / 3600.0,
        day.night_length().num_seconds() as f64 / 3600.0
    );
}

fn print_chart(label: &str, chart: &ChartSnapshot) {
    println!("== {label}: {} ==", chart.moment.local);
    println!(
        "Location:     {:.4}, {:.4} (UTC{:+})",
        chart.moment.location.latitude_deg,
        chart.moment.location.longitude_deg,
        chart.moment.tz_offset_hours
    );
    println!("Ayanamsha:    {}", chart.ayanamsha.name());
    print_vedic_day(&chart.vedic_day);
    println!("Day lord:     {}", chart.day_lord_sunrise);
    println!("Hora lord:    {}", chart.day_lord_fixed_clock);
    println!("Sun:          {:.4} {}", chart.sun.longitude, chart.sun);
    for point in &chart.points {
        println!("{point}");
    }
}

fn sun_times(config: &UdayaConfig) -> AnalyticSunTimes {
    AnalyticSunTimes::new(config.riseset)
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = resolve_config(&cli);

    match &cli.command {
        Commands::Classify { degrees } => {
            let pos = classify(*degrees);
            if cli.json {
                print_json(&pos);
            } else {
                println!(
                    "{} ({}) sign {} - {} ({:.4} deg in sign)",
                    pos.rashi.name(),
                    pos.rashi.western_name(),
                    pos.sign,
                    pos.dms,
                    pos.degrees_in_sign
                );
                println!(
                    "{} (nakshatra {}) - Pada {}",
                    pos.nakshatra.name(),
                    pos.nakshatra_number,
                    pos.pada
                );
            }
        }

        Commands::VedicDay { date } => {
            let moment = query_moment(&config, date);
            let day = VedicDayResolver::new(sun_times(&config))
                .resolve(&moment)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&day);
            } else {
                print_vedic_day(&day);
            }
        }

        Commands::DayLord { date, convention } => {
            let convention: DayBoundary = convention.parse().unwrap_or_else(|e| fail(e));
            let moment = query_moment(&config, date);
            let day = VedicDayResolver::new(sun_times(&config))
                .resolve(&moment)
                .unwrap_or_else(|e| fail(e));
            let lord = day_lord(convention, moment.local, &day).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&lord);
            } else {
                println!("{lord}");
            }
        }

        Commands::Udayam { date, sun_lon } => {
            let moment = query_moment(&config, date);
            let day = VedicDayResolver::new(sun_times(&config))
                .resolve(&moment)
                .unwrap_or_else(|e| fail(e));
            let sun = match sun_lon {
                Some(lon) => *lon,
                None => AnalyticEphemeris
                    .sun_longitude(&moment, config.ayanamsha)
                    .unwrap_or_else(|e| fail(e)),
            };
            let interpolator = UdayaLagnaInterpolator::from_triad(day.triad, sun);
            let (arc, fraction) = interpolator
                .arc_fraction(moment.local)
                .unwrap_or_else(|e| fail(e));
            let point = interpolator
                .at_moment(moment.local)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&json!({
                    "vedic_day": day,
                    "sun_longitude": sun,
                    "arc": arc,
                    "arc_fraction": fraction,
                    "udayam": point,
                }));
            } else {
                println!("Vedic day:    {}", day.date);
                println!("Sun:          {sun:.4}");
                println!("Arc:          {arc} ({:.2}% elapsed)", fraction * 100.0);
                println!("{point}");
            }
        }

        Commands::Points {
            date,
            aarudam,
            kavippu,
        } => {
            let moment = query_moment(&config, date);
            let day = VedicDayResolver::new(sun_times(&config))
                .resolve(&moment)
                .unwrap_or_else(|e| fail(e));
            let sun = AnalyticEphemeris
                .sun_longitude(&moment, config.ayanamsha)
                .unwrap_or_else(|e| fail(e));
            let sun_sign = classify(sun).sign;
            let aggregator = SpecialPointAggregator::new(
                supplied(*aarudam, config.special_points.aarudam, "aarudam"),
                supplied(*kavippu, config.special_points.kavippu, "kavippu"),
            );
            let points = aggregator
                .compute(&moment, sun, sun_sign, &day.triad)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&points);
            } else {
                for point in &points {
                    println!("{point}");
                }
            }
        }

        Commands::Chart {
            date,
            query_date,
            aarudam,
            kavippu,
        } => {
            let engine = ChartEngine::new(
                sun_times(&config),
                AnalyticEphemeris,
                SpecialPointAggregator::new(
                    supplied(*aarudam, config.special_points.aarudam, "aarudam"),
                    supplied(*kavippu, config.special_points.kavippu, "kavippu"),
                ),
                config.ayanamsha,
            );
            let birth = query_moment(&config, date);
            match query_date {
                Some(q) => {
                    let query = query_moment(&config, q);
                    let (birth_chart, query_chart) = engine
                        .compute_chart_pair(&birth, &query)
                        .unwrap_or_else(|e| fail(e));
                    if cli.json {
                        print_json(&json!({ "birth": birth_chart, "query": query_chart }));
                    } else {
                        print_chart("Birth", &birth_chart);
                        println!();
                        print_chart("Query", &query_chart);
                    }
                }
                None => {
                    let chart = engine.compute_chart(&birth).unwrap_or_else(|e| fail(e));
                    if cli.json {
                        print_json(&chart);
                    } else {
                        print_chart("Birth", &chart);
                    }
                }
            }
        }
    }
}
