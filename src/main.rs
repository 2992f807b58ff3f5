//! `display-interop` - Inspect the Windows display topology from the command line
//!
//! Prints the current display configuration, display devices and display modes
//! as JSON, and commits display settings changes staged in the registry.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display_interop::{
    DisplayInteropError,
    config::{AppConfig, ConfigManager, QueryScope},
    display::{
        DEVMODEW, DISPLAY_DEVICEW, DisplayInterop, EnumDisplayDevicesFlags,
        EnumDisplaySettingsFlags, EnumDisplaySettingsMode, QueryDisplayConfigFlags,
    },
    error::get_user_friendly_error,
    utils,
};
use serde_json::{Value, json};
use tracing::{error, info};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "display-interop", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the display configuration (paths and modes) as JSON
    Topology {
        /// Include inactive paths
        #[arg(long)]
        all: bool,
        /// Read the persisted configuration for the current connections
        #[arg(long, conflicts_with = "all")]
        database: bool,
        /// Skip monitor, source and adapter name lookups
        #[arg(long)]
        no_names: bool,
    },
    /// List display adapters and their monitors
    Devices {
        /// Report device interface paths instead of PnP ids
        #[arg(long)]
        interface_names: bool,
    },
    /// List every mode of a display device, such as \\.\DISPLAY1
    Modes {
        /// GDI device name
        device: String,
        /// Include modes the monitor may not support
        #[arg(long)]
        raw: bool,
        /// Include modes in every orientation
        #[arg(long)]
        rotated: bool,
    },
    /// Apply display settings staged with CDS_NORESET
    Commit,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        let message = e
            .downcast_ref::<DisplayInteropError>()
            .map_or_else(|| format!("{e:#}"), get_user_friendly_error);
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_level = utils::init_logging().context("Failed to initialize logging system")?;
    let config = ConfigManager::load().context("Failed to load configuration")?;
    log_level
        .set_level(&config.log_level)
        .context("Failed to apply the configured log level")?;
    info!("Running {:?}", cli.command);

    let interop = DisplayInterop::new();

    let output = match cli.command {
        Command::Topology {
            all,
            database,
            no_names,
        } => {
            let flags = topology_flags(&config, all, database);
            let resolve_names = config.query.resolve_names && !no_names;
            let snapshot = interop
                .snapshot(flags, resolve_names)
                .context("Failed to query the display configuration")?;
            info!(
                "Queried {} paths ({} active)",
                snapshot.paths.len(),
                snapshot.active_path_count()
            );
            serde_json::to_value(&snapshot)?
        }
        Command::Devices { interface_names } => {
            let flags = if interface_names {
                EnumDisplayDevicesFlags::GET_DEVICE_INTERFACE_NAME
            } else {
                EnumDisplayDevicesFlags::empty()
            };
            list_devices(&interop, flags)
        }
        Command::Modes {
            device,
            raw,
            rotated,
        } => {
            let mut flags = EnumDisplaySettingsFlags::empty();
            flags.set(EnumDisplaySettingsFlags::RAW_MODE, raw);
            flags.set(EnumDisplaySettingsFlags::ROTATED_MODE, rotated);

            let modes = interop.display_modes(Some(&device), flags);
            if modes.is_empty() {
                anyhow::bail!("{device} reported no display modes");
            }
            info!("{} reported {} modes", device, modes.len());
            Value::Array(
                modes
                    .iter()
                    .enumerate()
                    .map(|(index, mode)| devmode_json(Some(index), mode))
                    .collect(),
            )
        }
        Command::Commit => {
            let result = interop
                .commit_pending_settings()
                .context("Failed to commit staged display settings")?;
            json!({
                "result": result.name(),
                "restart_required": result.requires_restart(),
            })
        }
    };

    let text = if config.output.pretty_json {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");

    Ok(())
}

fn topology_flags(config: &AppConfig, all: bool, database: bool) -> QueryDisplayConfigFlags {
    if database {
        QueryDisplayConfigFlags::DATABASE_CURRENT
    } else if all || config.query.scope == QueryScope::All {
        QueryDisplayConfigFlags::ALL_PATHS
    } else {
        QueryDisplayConfigFlags::ONLY_ACTIVE_PATHS
    }
}

fn list_devices(interop: &DisplayInterop, flags: EnumDisplayDevicesFlags) -> Value {
    let adapters = interop.display_devices(None, flags);
    info!("Found {} display adapters", adapters.len());

    Value::Array(
        adapters
            .iter()
            .map(|adapter| {
                let name = adapter.DeviceName.to_string_lossy();
                let monitors: Vec<Value> = interop
                    .display_devices(Some(&name), flags)
                    .iter()
                    .map(|monitor| device_json(monitor, None))
                    .collect();
                let current = interop
                    .enum_display_settings(Some(&name), EnumDisplaySettingsMode::Current)
                    .map(|mode| devmode_json(None, &mode));

                let mut entry = device_json(adapter, current);
                entry["monitors"] = Value::Array(monitors);
                entry
            })
            .collect(),
    )
}

fn device_json(device: &DISPLAY_DEVICEW, current: Option<Value>) -> Value {
    json!({
        "name": device.DeviceName.to_string_lossy(),
        "description": device.DeviceString.to_string_lossy(),
        "id": device.DeviceID.to_string_lossy(),
        "key": device.DeviceKey.to_string_lossy(),
        "state_flags": format!("{:#010X}", device.StateFlags.bits()),
        "active": device.is_active(),
        "primary": device.is_primary(),
        "current_mode": current,
    })
}

fn devmode_json(index: Option<usize>, mode: &DEVMODEW) -> Value {
    json!({
        "index": index,
        "resolution": mode.resolution().map(|(width, height)| format!("{width}x{height}")),
        "bits_per_pel": mode.bits_per_pel(),
        "frequency_hz": mode.display_frequency(),
        "position": mode.position().map(|point| [point.x, point.y]),
        "orientation": mode.orientation().map(|orientation| format!("{orientation:?}")),
    })
}
