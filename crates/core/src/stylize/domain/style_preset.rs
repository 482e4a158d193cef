/// Named bundle of rotoscope stylization parameters.
///
/// Presets only carry the four stylization fields; overlay and deface
/// settings are not part of a visual style.
#[derive(Clone, Debug, PartialEq)]
pub struct StylePreset {
    pub name: &'static str,
    pub edge_threshold: f64,
    pub posterization: u32,
    pub line_thickness: f64,
    pub color_matrix: [f64; 9],
}

static PRESETS: &[StylePreset] = &[
    StylePreset {
        name: "scanner",
        edge_threshold: 30.0,
        posterization: 6,
        line_thickness: 2.0,
        color_matrix: [0.8, 0.1, 0.1, 0.1, 0.8, 0.1, 0.1, 0.1, 0.8],
    },
    StylePreset {
        name: "comic",
        edge_threshold: 50.0,
        posterization: 4,
        line_thickness: 3.0,
        color_matrix: [1.2, 0.0, 0.0, 0.0, 1.2, 0.0, 0.0, 0.0, 1.2],
    },
    StylePreset {
        name: "noir",
        edge_threshold: 40.0,
        posterization: 8,
        line_thickness: 2.0,
        color_matrix: [0.3, 0.3, 0.3, 0.6, 0.6, 0.6, 0.1, 0.1, 0.1],
    },
    StylePreset {
        name: "neon",
        edge_threshold: 25.0,
        posterization: 5,
        line_thickness: 2.5,
        color_matrix: [1.5, 0.0, 0.5, 0.0, 1.5, 0.5, 0.5, 0.5, 1.5],
    },
    StylePreset {
        name: "watercolor",
        edge_threshold: 60.0,
        posterization: 10,
        line_thickness: 1.5,
        color_matrix: [0.9, 0.1, 0.2, 0.1, 0.9, 0.2, 0.2, 0.2, 0.9],
    },
];

/// Looks up a preset by its exact name.
pub fn preset(name: &str) -> Option<&'static StylePreset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// All preset names, in registry order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
