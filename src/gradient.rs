use crate::models::{ColourStop, PixelGrid, Rgb};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("gradient needs at least one colour stop")]
    NoStops,
    #[error("stop {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("stop weights sum to zero")]
    ZeroTotalWeight,
    #[error("stop weights overflow when summed")]
    NonFiniteTotalWeight,
    #[error("image dimensions must be non-zero (got {primary}x{secondary})")]
    ZeroDimension { primary: u32, secondary: u32 },
    #[error("row {row} has incorrect length: expected {expected}, got {actual}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Pixel offset of every stop along the primary axis.
///
/// Each stop ends its own share of `length` after the previous stop, so a
/// first stop with zero weight anchors the gradient at 0. Offsets are
/// truncated, so the last one can fall short of `length`.
pub fn stop_positions(length: u32, stops: &[ColourStop]) -> Result<Vec<usize>, GradientError> {
    if stops.is_empty() {
        return Err(GradientError::NoStops);
    }
    for (index, stop) in stops.iter().enumerate() {
        if !stop.weight.is_finite() || stop.weight < 0.0 {
            return Err(GradientError::InvalidWeight {
                index,
                weight: stop.weight,
            });
        }
    }
    let total: f64 = stops.iter().map(|s| s.weight).sum();
    if !total.is_finite() {
        return Err(GradientError::NonFiniteTotalWeight);
    }
    if total <= 0.0 {
        return Err(GradientError::ZeroTotalWeight);
    }

    let mut current = 0usize;
    let positions = stops
        .iter()
        .map(|stop| {
            current = (current as f64 + stop.weight / total * length as f64) as usize;
            current
        })
        .collect();
    Ok(positions)
}

/// The 1-D gradient of `length` colours, reversed when `flip` is set.
pub fn gradient_line(
    length: u32,
    flip: bool,
    stops: &[ColourStop],
) -> Result<Vec<Rgb>, GradientError> {
    let positions = stop_positions(length, stops)?;
    // stop_positions guarantees at least one stop
    let last = stops[stops.len() - 1].colour;
    let anchored: Vec<(Rgb, usize)> = stops
        .iter()
        .map(|s| s.colour)
        .zip(positions)
        .collect();

    let mut line: Vec<Rgb> = (0..length as usize)
        .map(|x| {
            anchored
                .windows(2)
                .find_map(|pair| {
                    let (a, start) = pair[0];
                    let (b, end) = pair[1];
                    (start <= x && x < end).then(|| {
                        let t = (x - start) as f64 / (end - start) as f64;
                        a.lerp(&b, t)
                    })
                })
                // flat extension past the last stop
                .unwrap_or(last)
        })
        .collect();

    if flip {
        line.reverse();
    }
    Ok(line)
}

/// Rasterize `stops` into a grid `secondary` pixels wide and `primary`
/// pixels tall, with colour varying down the rows.
pub fn rasterize(
    primary: u32,
    secondary: u32,
    flip: bool,
    stops: &[ColourStop],
) -> Result<PixelGrid, GradientError> {
    if primary == 0 || secondary == 0 {
        return Err(GradientError::ZeroDimension { primary, secondary });
    }

    let line = gradient_line(primary, flip, stops)?;

    // one interleaved RGB row per step along the secondary axis
    let rows: Vec<Vec<u8>> = (0..secondary)
        .map(|_| line.iter().flat_map(Rgb::channels).collect())
        .collect();

    let expected = primary as usize * 3;
    for (row, channels) in rows.iter().enumerate() {
        if channels.len() != expected {
            return Err(GradientError::RowLength {
                row,
                expected,
                actual: channels.len(),
            });
        }
    }

    let transposed = (0..primary as usize)
        .map(|x| {
            rows.iter()
                .map(|row| Rgb::new(row[x * 3], row[x * 3 + 1], row[x * 3 + 2]))
                .collect()
        })
        .collect();

    Ok(PixelGrid::from_rows(secondary, transposed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn stops(pairs: &[(&str, f64)]) -> Vec<ColourStop> {
        pairs.iter()
            .map(|&(hex, w)| ColourStop::from_hex(hex, w).unwrap())
            .collect()
    }

    fn random_stops(rng: &mut StdRng) -> Vec<ColourStop> {
        let n = rng.random_range(2..7);
        (0..n)
            .map(|_| {
                let colour = Rgb::new(rng.random(), rng.random(), rng.random());
                ColourStop::new(colour, rng.random_range(0.05..3.0))
            })
            .collect()
    }

    #[test]
    fn test_black_to_white_positions() {
        let s = stops(&[("#000000", 1.0), ("#FFFFFF", 1.0)]);
        assert_eq!(stop_positions(10, &s).unwrap(), vec![5, 10]);

        let line = gradient_line(10, false, &s).unwrap();
        assert_eq!(line.len(), 10);
        // nothing covers 0..5, so it takes the last stop
        for px in &line[..5] {
            assert_eq!(*px, WHITE);
        }
        assert_eq!(line[5], BLACK);
        assert_eq!(line[6], Rgb::new(51, 51, 51));
        assert_eq!(line[9], Rgb::new(204, 204, 204));
    }

    #[test]
    fn test_single_stop_is_constant() {
        let s = stops(&[("#FF0000", 1.0)]);
        let grid = rasterize(16, 4, false, &s).unwrap();
        assert!(grid.rows().flatten().all(|&px| px == Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_positions_truncate() {
        let s = stops(&[("#000000", 1.0), ("#FF0000", 1.0), ("#FFFFFF", 1.0)]);
        // each share is 10/3 = 3.33, truncated after adding it on
        assert_eq!(stop_positions(10, &s).unwrap(), vec![3, 6, 9]);

        let line = gradient_line(10, false, &s).unwrap();
        assert_eq!(line[3], BLACK);
        assert_eq!(line[4], Rgb::new(85, 0, 0));
        assert_eq!(line[6], Rgb::new(255, 0, 0));
        assert_eq!(line[8], Rgb::new(255, 170, 170));
        assert_eq!(line[9], WHITE);
    }

    #[test]
    fn test_zero_weight_first_stop() {
        let s = stops(&[("#000000", 0.0), ("#FF0000", 1.0), ("#0000FF", 1.0)]);
        assert_eq!(stop_positions(8, &s).unwrap(), vec![0, 4, 8]);
        let line = gradient_line(8, false, &s).unwrap();
        assert_eq!(line[0], BLACK);
        assert_eq!(line[2], Rgb::new(127, 0, 0));
        assert_eq!(line[4], Rgb::new(255, 0, 0));
        assert_eq!(line[6], Rgb::new(127, 0, 127));
        assert_eq!(line[7], Rgb::new(63, 0, 191));
    }

    #[test]
    fn test_unequal_weights_night_sky() {
        let s = stops(&[
            ("#000000", 0.0),
            ("#8B0000", 0.2),
            ("#FF4500", 0.6),
            ("#FFD700", 0.8),
            ("#000000", 1.0),
        ]);
        assert_eq!(stop_positions(128, &s).unwrap(), vec![0, 9, 38, 77, 126]);

        let line = gradient_line(128, false, &s).unwrap();
        let expected = [
            (0, BLACK),
            (5, Rgb::new(77, 0, 0)),
            (9, Rgb::new(139, 0, 0)),
            (20, Rgb::new(183, 26, 0)),
            (38, Rgb::new(255, 69, 0)),
            (60, Rgb::new(255, 151, 0)),
            (77, Rgb::new(255, 215, 0)),
            (100, Rgb::new(135, 114, 0)),
            (125, Rgb::new(5, 4, 0)),
            (126, BLACK),
            (127, BLACK),
        ];
        for (x, colour) in expected {
            assert_eq!(line[x], colour, "pixel {}", x);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(stop_positions(10, &[]), Err(GradientError::NoStops));
        assert_eq!(
            stop_positions(10, &stops(&[("#000000", 0.0), ("#FFFFFF", 0.0)])),
            Err(GradientError::ZeroTotalWeight)
        );
        assert_eq!(
            stop_positions(10, &stops(&[("#000000", f64::MAX), ("#FFFFFF", f64::MAX)])),
            Err(GradientError::NonFiniteTotalWeight)
        );
        assert!(matches!(
            stop_positions(10, &stops(&[("#000000", 1.0), ("#FFFFFF", -1.0)])),
            Err(GradientError::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            stop_positions(10, &stops(&[("#000000", f64::NAN)])),
            Err(GradientError::InvalidWeight { index: 0, .. })
        ));
        let s = stops(&[("#000000", 1.0), ("#FFFFFF", 1.0)]);
        assert_eq!(
            rasterize(0, 5, false, &s),
            Err(GradientError::ZeroDimension {
                primary: 0,
                secondary: 5
            })
        );
    }

    #[test]
    fn test_grid_is_transposed() {
        let s = stops(&[("#000000", 1.0), ("#FFFFFF", 1.0)]);
        let grid = rasterize(10, 3, false, &s).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 10);

        let line = gradient_line(10, false, &s).unwrap();
        for (x, colour) in line.iter().enumerate() {
            for y in 0..3 {
                assert_eq!(grid.pixel(y, x as u32), Some(*colour));
            }
        }
    }

    #[test]
    fn test_random_first_and_last_pixels() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let s = random_stops(&mut rng);
            let length = rng.random_range(1..400);
            let positions = stop_positions(length, &s).unwrap();
            let line = gradient_line(length, false, &s).unwrap();

            let last_colour = s[s.len() - 1].colour;
            if positions[0] < positions[1] {
                assert_eq!(line[positions[0]], s[0].colour);
            }
            // before the first stop and past the last one
            for px in &line[..positions[0].min(line.len())] {
                assert_eq!(*px, last_colour);
            }
            let last = *positions.last().unwrap();
            for px in line.iter().skip(last) {
                assert_eq!(*px, last_colour);
            }
        }
    }

    #[test]
    fn test_random_flip_symmetry_and_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let s = random_stops(&mut rng);
            let primary = rng.random_range(1..300);
            let secondary = rng.random_range(1..20);

            let forward = rasterize(primary, secondary, false, &s).unwrap();
            let flipped = rasterize(primary, secondary, true, &s).unwrap();
            assert_eq!(forward, rasterize(primary, secondary, false, &s).unwrap());

            assert_eq!(forward.width(), secondary);
            assert_eq!(forward.height(), primary);
            assert_eq!(forward.rows().count(), primary as usize);
            assert!(forward.rows().all(|r| r.len() == secondary as usize));

            for x in 0..primary {
                for y in 0..secondary {
                    assert_eq!(
                        flipped.pixel(y, x),
                        forward.pixel(y, primary - 1 - x),
                        "flip mismatch at row {}",
                        x
                    );
                }
            }
        }
    }
}
