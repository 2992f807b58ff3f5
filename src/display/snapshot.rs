//! Serializable summary of a queried topology
//!
//! The raw records are awkward to log: unions, bitfields and packed LUIDs. A
//! [`TopologySnapshot`] decodes them once into plain values that `serde` can
//! write as JSON.

use super::api::{DisplayApi, DisplayInterop, DisplayTopology};
use super::config_types::{
    DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_TOPOLOGY_ID, LUID, ModeInfo, QueryDisplayConfigFlags,
    RECTL, format_luid, luid_to_u64,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, warn};

/// Decoded topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    /// Topology id, present for `QDC_DATABASE_CURRENT` queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology_id: Option<String>,
    /// One entry per path record
    pub paths: Vec<PathSnapshot>,
    /// One entry per mode record
    pub modes: Vec<ModeSnapshot>,
}

/// Decoded `DISPLAYCONFIG_PATH_INFO`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSnapshot {
    /// `DISPLAYCONFIG_PATH_ACTIVE`
    pub active: bool,
    /// Source half of the path
    pub source: SourceSnapshot,
    /// Target half of the path
    pub target: TargetSnapshot,
}

/// Decoded path source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Adapter LUID packed into a `u64`
    pub adapter_id: u64,
    /// Source id
    pub id: u32,
    /// Index into [`TopologySnapshot::modes`]
    pub mode_index: Option<usize>,
    /// GDI device name such as `\\.\DISPLAY1`
    #[serde(default)]
    pub gdi_name: Option<String>,
}

/// Decoded path target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    /// Adapter LUID packed into a `u64`
    pub adapter_id: u64,
    /// Target id
    pub id: u32,
    /// Index into [`TopologySnapshot::modes`]
    pub mode_index: Option<usize>,
    /// Whether a monitor is connected
    pub available: bool,
    /// Connector type
    pub output_technology: String,
    /// Rotation
    pub rotation: String,
    /// Scaling
    pub scaling: String,
    /// Refresh rate in hertz
    pub refresh_rate_hz: Option<f64>,
    /// Monitor friendly name
    #[serde(default)]
    pub friendly_name: Option<String>,
    /// Monitor device interface path
    #[serde(default)]
    pub device_path: Option<String>,
    /// PnP manufacturer code from the EDID
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Device path of the adapter driving the target
    #[serde(default)]
    pub adapter_path: Option<String>,
}

/// Decoded `DISPLAYCONFIG_MODE_INFO`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeSnapshot {
    /// Source mode
    Source {
        /// Adapter LUID packed into a `u64`
        adapter_id: u64,
        /// Source id
        id: u32,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// Pixel format
        pixel_format: String,
        /// Desktop position
        x: i32,
        /// Desktop position
        y: i32,
    },
    /// Target mode
    Target {
        /// Adapter LUID packed into a `u64`
        adapter_id: u64,
        /// Target id
        id: u32,
        /// Pixel clock in hertz
        pixel_rate: u64,
        /// Active width in pixels
        active_width: u32,
        /// Active height in pixels
        active_height: u32,
        /// Vertical refresh in hertz
        vsync_hz: Option<f64>,
        /// Scan line ordering
        scan_line_ordering: String,
    },
    /// Desktop image placement
    DesktopImage {
        /// Adapter LUID packed into a `u64`
        adapter_id: u64,
        /// Target id
        id: u32,
        /// Path source size
        source_width: i32,
        /// Path source size
        source_height: i32,
        /// Desktop image region as left, top, right, bottom
        region: [i32; 4],
        /// Desktop image clip as left, top, right, bottom
        clip: [i32; 4],
    },
    /// A record whose `infoType` is not known
    Unknown {
        /// Raw `infoType`
        info_type: u32,
    },
}

fn label(name: Option<&'static str>, raw: impl Debug) -> String {
    name.map_or_else(|| format!("{raw:?}"), str::to_owned)
}

impl PathSnapshot {
    fn from_path(path: &DISPLAYCONFIG_PATH_INFO) -> Self {
        let source = &path.sourceInfo;
        let target = &path.targetInfo;
        Self {
            active: path.is_active(),
            source: SourceSnapshot {
                adapter_id: luid_to_u64(source.adapterId),
                id: source.id,
                mode_index: path.source_mode_index(),
                gdi_name: None,
            },
            target: TargetSnapshot {
                adapter_id: luid_to_u64(target.adapterId),
                id: target.id,
                mode_index: path.target_mode_index(),
                available: target.is_target_available(),
                output_technology: label(target.outputTechnology.name(), target.outputTechnology),
                rotation: label(target.rotation.name(), target.rotation),
                scaling: label(target.scaling.name(), target.scaling),
                refresh_rate_hz: target.refreshRate.value(),
                friendly_name: None,
                device_path: None,
                manufacturer: None,
                adapter_path: None,
            },
        }
    }
}

impl From<&ModeInfo> for ModeSnapshot {
    fn from(mode: &ModeInfo) -> Self {
        match *mode {
            ModeInfo::Source {
                id,
                adapter_id,
                mode,
            } => Self::Source {
                adapter_id: luid_to_u64(adapter_id),
                id,
                width: mode.width,
                height: mode.height,
                pixel_format: label(mode.pixelFormat.name(), mode.pixelFormat),
                x: mode.position.x,
                y: mode.position.y,
            },
            ModeInfo::Target {
                id,
                adapter_id,
                mode,
            } => {
                let signal = mode.targetVideoSignalInfo;
                Self::Target {
                    adapter_id: luid_to_u64(adapter_id),
                    id,
                    pixel_rate: signal.pixelRate,
                    active_width: signal.activeSize.cx,
                    active_height: signal.activeSize.cy,
                    vsync_hz: signal.vSyncFreq.value(),
                    scan_line_ordering: label(
                        signal.scanLineOrdering.name(),
                        signal.scanLineOrdering,
                    ),
                }
            }
            ModeInfo::DesktopImage {
                id,
                adapter_id,
                info,
            } => {
                let rect = |r: RECTL| [r.left, r.top, r.right, r.bottom];
                Self::DesktopImage {
                    adapter_id: luid_to_u64(adapter_id),
                    id,
                    source_width: info.PathSourceSize.x,
                    source_height: info.PathSourceSize.y,
                    region: rect(info.DesktopImageRegion),
                    clip: rect(info.DesktopImageClip),
                }
            }
        }
    }
}

impl TopologySnapshot {
    /// Decode a topology without resolving any names
    pub fn from_topology(topology: &DisplayTopology) -> Self {
        let modes = topology
            .modes
            .iter()
            .map(|raw| match raw.decode() {
                Ok(mode) => ModeSnapshot::from(&mode),
                Err(e) => {
                    warn!("Skipping mode record: {e}");
                    ModeSnapshot::Unknown {
                        info_type: raw.infoType.0,
                    }
                }
            })
            .collect();

        Self {
            topology_id: None,
            paths: topology.paths.iter().map(PathSnapshot::from_path).collect(),
            modes,
        }
    }

    /// Number of active paths
    pub fn active_path_count(&self) -> usize {
        self.paths.iter().filter(|path| path.active).count()
    }
}

fn probe<T>(what: &str, adapter_id: LUID, id: u32, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                "Failed to resolve {what} for adapter {} id {id}: {e}",
                format_luid(adapter_id)
            );
            None
        }
    }
}

impl<A: DisplayApi> DisplayInterop<A> {
    /// Query the topology and decode it into a [`TopologySnapshot`]
    ///
    /// With `DATABASE_CURRENT` in `flags` the persisted configuration is read and
    /// its topology id recorded. With `resolve_names` every path is enriched
    /// through the device-info probes; a probe that fails is logged and its
    /// field left empty.
    pub fn snapshot(
        &self,
        flags: QueryDisplayConfigFlags,
        resolve_names: bool,
    ) -> Result<TopologySnapshot> {
        let (topology, topology_id): (DisplayTopology, Option<DISPLAYCONFIG_TOPOLOGY_ID>) =
            if flags.contains(QueryDisplayConfigFlags::DATABASE_CURRENT) {
                let (topology, id) = self.query_database_current()?;
                (topology, Some(id))
            } else {
                (self.query_display_config(flags)?, None)
            };

        let mut snapshot = TopologySnapshot::from_topology(&topology);
        snapshot.topology_id = topology_id.map(|id| label(id.name(), id));

        if resolve_names {
            for (path, entry) in topology.paths.iter().zip(&mut snapshot.paths) {
                self.resolve_path_names(path, entry);
            }
        }

        debug!(
            "Snapshot: {} paths ({} active), {} modes",
            snapshot.paths.len(),
            snapshot.active_path_count(),
            snapshot.modes.len()
        );
        Ok(snapshot)
    }

    fn resolve_path_names(&self, path: &DISPLAYCONFIG_PATH_INFO, entry: &mut PathSnapshot) {
        let source = &path.sourceInfo;
        let target = &path.targetInfo;

        entry.source.gdi_name = probe(
            "source name",
            source.adapterId,
            source.id,
            self.source_name(source.adapterId, source.id),
        );

        if let Some(name) = probe(
            "target name",
            target.adapterId,
            target.id,
            self.target_name(target.adapterId, target.id),
        ) {
            entry.target.friendly_name = Some(name.monitorFriendlyDeviceName.to_string_lossy())
                .filter(|name| !name.is_empty());
            entry.target.device_path = Some(name.monitorDevicePath.to_string_lossy())
                .filter(|path| !path.is_empty());
            entry.target.manufacturer = name.edid_manufacturer();
        }

        entry.target.adapter_path = probe(
            "adapter name",
            target.adapterId,
            target.id,
            self.target_adapter_name(path),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::config_types::{
        DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PIXELFORMAT, DISPLAYCONFIG_RATIONAL,
        DISPLAYCONFIG_SOURCE_MODE, DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY, POINTL, PathFlags,
    };

    fn sample_topology() -> DisplayTopology {
        let adapter = LUID {
            LowPart: 0x1_0000,
            HighPart: 0,
        };
        let mut path = DISPLAYCONFIG_PATH_INFO::default();
        path.flags = PathFlags::ACTIVE;
        path.sourceInfo.adapterId = adapter;
        path.sourceInfo.modeInfoIdx = 0;
        path.targetInfo.adapterId = adapter;
        path.targetInfo.id = 4352;
        path.targetInfo.modeInfoIdx = 0xFFFF_FFFF;
        path.targetInfo.outputTechnology = DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY::HDMI;
        path.targetInfo.refreshRate = DISPLAYCONFIG_RATIONAL {
            Numerator: 60,
            Denominator: 1,
        };
        path.targetInfo.targetAvailable = 1;

        let source = DISPLAYCONFIG_MODE_INFO::from(ModeInfo::Source {
            id: 0,
            adapter_id: adapter,
            mode: DISPLAYCONFIG_SOURCE_MODE {
                width: 1920,
                height: 1080,
                pixelFormat: DISPLAYCONFIG_PIXELFORMAT::PIXELFORMAT_32BPP,
                position: POINTL::default(),
            },
        });

        DisplayTopology {
            paths: vec![path],
            modes: vec![source],
        }
    }

    #[test]
    fn test_from_topology_decodes_paths_and_modes() {
        let snapshot = TopologySnapshot::from_topology(&sample_topology());
        assert_eq!(snapshot.active_path_count(), 1);

        let path = &snapshot.paths[0];
        assert_eq!(path.source.adapter_id, 0x1_0000);
        assert_eq!(path.source.mode_index, Some(0));
        assert_eq!(path.target.mode_index, None);
        assert_eq!(path.target.output_technology, "HDMI");
        assert_eq!(path.target.refresh_rate_hz, Some(60.0));
        assert!(path.target.available);

        assert!(matches!(
            snapshot.modes[0],
            ModeSnapshot::Source {
                width: 1920,
                height: 1080,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_mode_kind_is_kept() {
        let mut topology = sample_topology();
        topology.modes[0].infoType.0 = 7;
        let snapshot = TopologySnapshot::from_topology(&topology);
        assert_eq!(snapshot.modes[0], ModeSnapshot::Unknown { info_type: 7 });
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = TopologySnapshot::from_topology(&sample_topology());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["modes"][0]["kind"], "source");
        assert_eq!(json["modes"][0]["pixel_format"], "PIXELFORMAT_32BPP");
        assert!(json.get("topology_id").is_none());

        let back: TopologySnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
