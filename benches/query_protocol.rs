#![allow(clippy::unwrap_used)]
//! Benchmarks for the query protocol, mode decoding and snapshot building
//!
//! A synthetic `DisplayApi` reports a fixed topology so the numbers measure
//! this crate's own work rather than the display driver.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use display_interop::display::config_types::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_RATIONAL,
    DISPLAYCONFIG_SOURCE_MODE, DISPLAYCONFIG_TARGET_MODE, DISPLAYCONFIG_TOPOLOGY_ID, LUID,
    ModeInfo, PathFlags, QueryDisplayConfigFlags, SetDisplayConfigFlags,
};
use display_interop::display::device_info::DeviceInfoPacket;
use display_interop::display::device_types::{DISPLAY_DEVICEW, EnumDisplayDevicesFlags};
use display_interop::display::settings_types::{
    ChangeDisplaySettingsFlags, DEVMODEW, EnumDisplaySettingsFlags, EnumDisplaySettingsMode,
    VIDEOPARAMETERS,
};
use display_interop::display::{DisplayApi, DisplayInterop, TopologySnapshot};
use std::hint::black_box;

const ADAPTER: LUID = LUID {
    LowPart: 0x42,
    HighPart: 0,
};

/// Reports `paths` active paths, each with one source and one target mode
struct SyntheticApi {
    paths: u32,
}

impl DisplayApi for SyntheticApi {
    fn get_display_config_buffer_sizes(
        &self,
        _flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        num_modes: &mut u32,
    ) -> i32 {
        *num_paths = self.paths;
        *num_modes = self.paths * 2;
        0
    }

    fn query_display_config(
        &self,
        _flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        paths: &mut [DISPLAYCONFIG_PATH_INFO],
        num_modes: &mut u32,
        modes: &mut [DISPLAYCONFIG_MODE_INFO],
        _topology_id: Option<&mut DISPLAYCONFIG_TOPOLOGY_ID>,
    ) -> i32 {
        for (index, path) in (0..).zip(paths.iter_mut()) {
            path.flags = PathFlags::ACTIVE;
            path.sourceInfo.adapterId = ADAPTER;
            path.sourceInfo.id = index;
            path.sourceInfo.modeInfoIdx = index * 2;
            path.targetInfo.adapterId = ADAPTER;
            path.targetInfo.id = index;
            path.targetInfo.modeInfoIdx = index * 2 + 1;
            path.targetInfo.refreshRate = DISPLAYCONFIG_RATIONAL {
                Numerator: 144_000,
                Denominator: 1000,
            };
        }
        for (index, mode) in (0..).zip(modes.iter_mut()) {
            *mode = if index % 2 == 0 {
                ModeInfo::Source {
                    id: index / 2,
                    adapter_id: ADAPTER,
                    mode: DISPLAYCONFIG_SOURCE_MODE {
                        width: 2560,
                        height: 1440,
                        ..DISPLAYCONFIG_SOURCE_MODE::default()
                    },
                }
            } else {
                ModeInfo::Target {
                    id: index / 2,
                    adapter_id: ADAPTER,
                    mode: DISPLAYCONFIG_TARGET_MODE::default(),
                }
            }
            .into();
        }
        *num_paths = self.paths;
        *num_modes = self.paths * 2;
        0
    }

    fn set_display_config(
        &self,
        _paths: Option<&[DISPLAYCONFIG_PATH_INFO]>,
        _modes: Option<&[DISPLAYCONFIG_MODE_INFO]>,
        _flags: SetDisplayConfigFlags,
    ) -> i32 {
        0
    }

    fn get_device_info<P: DeviceInfoPacket>(&self, _packet: &mut P) -> i32 {
        0
    }

    fn set_device_info<P: DeviceInfoPacket>(&self, _packet: &P) -> i32 {
        0
    }

    fn enum_display_devices(
        &self,
        _device: Option<&[u16]>,
        _index: u32,
        _display_device: &mut DISPLAY_DEVICEW,
        _flags: EnumDisplayDevicesFlags,
    ) -> bool {
        false
    }

    fn enum_display_settings(
        &self,
        _device: Option<&[u16]>,
        _mode: EnumDisplaySettingsMode,
        _devmode: &mut DEVMODEW,
    ) -> bool {
        false
    }

    fn enum_display_settings_ex(
        &self,
        _device: Option<&[u16]>,
        mode: EnumDisplaySettingsMode,
        devmode: &mut DEVMODEW,
        _flags: EnumDisplaySettingsFlags,
    ) -> bool {
        match mode {
            EnumDisplaySettingsMode::Index(index) if index < 256 => {
                devmode.set_resolution(800 + index, 600 + index);
                devmode.set_display_frequency(60);
                true
            }
            _ => false,
        }
    }

    fn change_display_settings(
        &self,
        _devmode: Option<&DEVMODEW>,
        _flags: ChangeDisplaySettingsFlags,
    ) -> i32 {
        0
    }

    fn change_display_settings_ex(
        &self,
        _device: Option<&[u16]>,
        _devmode: Option<&DEVMODEW>,
        _flags: ChangeDisplaySettingsFlags,
        _video_parameters: Option<&mut VIDEOPARAMETERS>,
    ) -> i32 {
        0
    }
}

fn bench_query_display_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_display_config");
    for paths in [1u32, 4, 16] {
        let interop = DisplayInterop::with_api(SyntheticApi { paths });
        group.bench_with_input(BenchmarkId::from_parameter(paths), &interop, |b, interop| {
            b.iter(|| {
                let topology = interop
                    .query_display_config(black_box(QueryDisplayConfigFlags::ONLY_ACTIVE_PATHS))
                    .unwrap();
                black_box(topology);
            });
        });
    }
    group.finish();
}

fn bench_mode_decode(c: &mut Criterion) {
    let interop = DisplayInterop::with_api(SyntheticApi { paths: 16 });
    let topology = interop
        .query_display_config(QueryDisplayConfigFlags::ONLY_ACTIVE_PATHS)
        .unwrap();

    c.bench_function("mode_decode", |b| {
        b.iter(|| {
            for mode in black_box(&topology.modes) {
                black_box(mode.decode().unwrap());
            }
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let interop = DisplayInterop::with_api(SyntheticApi { paths: 4 });
    let topology = interop
        .query_display_config(QueryDisplayConfigFlags::ONLY_ACTIVE_PATHS)
        .unwrap();

    c.bench_function("snapshot_from_topology", |b| {
        b.iter(|| black_box(TopologySnapshot::from_topology(black_box(&topology))));
    });

    c.bench_function("snapshot_to_json", |b| {
        let snapshot = TopologySnapshot::from_topology(&topology);
        b.iter(|| black_box(serde_json::to_string(black_box(&snapshot)).unwrap()));
    });
}

fn bench_display_modes(c: &mut Criterion) {
    let interop = DisplayInterop::with_api(SyntheticApi { paths: 1 });

    c.bench_function("display_modes_256", |b| {
        b.iter(|| {
            black_box(interop.display_modes(
                black_box(Some(r"\\.\DISPLAY1")),
                EnumDisplaySettingsFlags::empty(),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_query_display_config,
    bench_mode_decode,
    bench_snapshot,
    bench_display_modes
);
criterion_main!(benches);
