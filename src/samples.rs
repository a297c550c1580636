//! Sample setup documents embedded in the binary

/// A named sample document.
pub struct Sample {
    pub name: &'static str,
    pub content: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "mac_full",
        content: include_str!("../samples/mac_full.yaml"),
    },
    Sample {
        name: "mac_minimal",
        content: include_str!("../samples/mac_minimal.yaml"),
    },
    Sample {
        name: "ubuntu_full",
        content: include_str!("../samples/ubuntu_full.yaml"),
    },
    Sample {
        name: "ubuntu_minimal",
        content: include_str!("../samples/ubuntu_minimal.yaml"),
    },
    Sample {
        name: "windows_full",
        content: include_str!("../samples/windows_full.yaml"),
    },
    Sample {
        name: "windows_minimal",
        content: include_str!("../samples/windows_minimal.yaml"),
    },
];

/// Find a sample by name. `windows-full` and `windows_full` are the same.
pub fn find(name: &str) -> Option<&'static Sample> {
    let normalized = name.trim().replace('-', "_");
    SAMPLES.iter().find(|s| s.name == normalized)
}
