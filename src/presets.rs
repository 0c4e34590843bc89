/// Built-in "night sky" presets as `(filename, [(hex, weight)])`.
pub const NIGHT_SKY: &[(&str, &[(&str, f64)])] = &[
    (
        "night_sky_1.png",
        &[
            ("#000000", 0.0),
            ("#8B0000", 0.2),
            ("#FF4500", 0.6),
            ("#FFD700", 0.8),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_2.png",
        &[
            ("#000000", 0.0),
            ("#FF6347", 0.3),
            ("#FF8C00", 0.6),
            ("#2F4F4F", 1.0),
        ],
    ),
    (
        "night_sky_3.png",
        &[
            ("#000000", 0.0),
            ("#7B68EE", 0.4),
            ("#FF1493", 0.6),
            ("#800080", 0.9),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_4.png",
        &[
            ("#000000", 0.0),
            ("#4B0082", 0.5),
            ("#8A2BE2", 0.8),
            ("#191970", 1.0),
        ],
    ),
    (
        "night_sky_5.png",
        &[
            ("#000000", 0.0),
            ("#FFD700", 0.25),
            ("#FF6347", 0.5),
            ("#2F4F4F", 0.9),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_6.png",
        &[
            ("#000000", 0.0),
            ("#FF4500", 0.3),
            ("#DC143C", 0.5),
            ("#00008B", 0.75),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_7.png",
        &[
            ("#000000", 0.0),
            ("#B22222", 0.3),
            ("#D2691E", 0.6),
            ("#2F4F4F", 0.9),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_8.png",
        &[
            ("#000000", 0.0),
            ("#FF1493", 0.4),
            ("#FFD700", 0.6),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_9.png",
        &[
            ("#000000", 0.0),
            ("#00008B", 0.4),
            ("#B0C4DE", 0.6),
            ("#191970", 1.0),
        ],
    ),
    (
        "night_sky_10.png",
        &[
            ("#000000", 0.0),
            ("#B0E0E6", 0.25),
            ("#87CEEB", 0.5),
            ("#4682B4", 0.8),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_11.png",
        &[
            ("#000000", 0.0),
            ("#800080", 0.3),
            ("#FF6347", 0.6),
            ("#2F4F4F", 0.9),
            ("#000000", 1.0),
        ],
    ),
    (
        "night_sky_12.png",
        &[
            ("#000000", 0.0),
            ("#B22222", 0.4),
            ("#8B4513", 0.7),
            ("#000000", 1.0),
        ],
    ),
];
