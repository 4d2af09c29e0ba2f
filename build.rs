use std::env;
use std::process::Command;

// CPU features the AVX2 backend needs. Both must be present.
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    sysctl_key: &'static str,
    detected: bool,
}

impl CpuFeature {
    fn required() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "avx2",
                sysctl_key: "hw.optional.avx2_0: 1",
                detected: false,
            },
            CpuFeature {
                name: "fma",
                sysctl_key: "hw.optional.fma: 1",
                detected: false,
            },
        ]
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            // Match whole flag names so "fma" does not hit "fma4".
            let flags: Vec<String> = cpuinfo
                .lines()
                .filter(|line| line.starts_with("flags"))
                .flat_map(|line| line.split_whitespace().map(str::to_lowercase))
                .collect();

            for feature in features.iter_mut() {
                feature.detected = flags.iter().any(|flag| flag == feature.name);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected = contents.contains(feature.sysctl_key);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        let detectors = Self::cpu_features_detectors();

        for detector in detectors {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &[CpuFeature], allowed: bool) {
        let cfg_flag = if allowed && features.iter().all(|feature| feature.detected) {
            "avx2"
        } else {
            "fallback"
        };

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SIMDTANH_DISABLE_AVX2");

    let mut features = CpuFeature::required();

    // Only query the host when it is also the target, and only for x86 targets.
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    let is_native_build = host == target;
    let is_x86 = target_arch == "x86" || target_arch == "x86_64";
    let disabled = env::var("SIMDTANH_DISABLE_AVX2").is_ok_and(|value| value == "1");

    if is_native_build && is_x86 {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::apply(&features, is_native_build && is_x86 && !disabled);
}
