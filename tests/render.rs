use blockbar::{
    Fit, Ink, Lane, Plot, PlotError, RenderConfig, Series, fit_and_render, render,
};
use pretty_assertions::assert_eq;

fn plain() -> RenderConfig {
    RenderConfig::builder().color(false).build().unwrap()
}

/// Drop every `ESC[...m` sequence.
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn row_count_follows_the_range() {
    let y = [1.2, 7.9, 3.3, 5.0];
    let baseline = Plot::new(&Series::single(&y), &plain()).unwrap();
    assert_eq!(baseline.canvas.rows(), 7); // round(6.7)

    let cfg = RenderConfig::builder()
        .color(false)
        .perzero(true)
        .build()
        .unwrap();
    let perzero = Plot::new(&Series::single(&y), &cfg).unwrap();
    assert_eq!(perzero.canvas.rows(), 8); // round(7.9 - 0)

    let mixed = [-2.6, 3.1];
    let perzero = Plot::new(&Series::single(&mixed), &cfg).unwrap();
    assert_eq!(perzero.canvas.rows(), 6); // round(5.7)
}

#[test]
fn zero_three_decimal_range_is_degenerate() {
    let y = [10.0, 10.0004];
    for perzero in [false, true] {
        let cfg = RenderConfig::builder()
            .perzero(perzero)
            .y_extrema(0.0, 0.0004)
            .build()
            .unwrap();
        assert!(matches!(
            render(&Series::single(&y), &cfg),
            Err(PlotError::DegenerateRange { .. })
        ));
    }
    assert!(matches!(
        render(&Series::single(&y), &plain()),
        Err(PlotError::DegenerateRange { .. })
    ));
}

#[test]
fn minimum_column_is_blank_and_maximum_column_is_full() {
    let y = [2.0, 5.5, 9.0];
    let plot = Plot::new(&Series::single(&y), &plain()).unwrap();
    let rows = plot.canvas.rows();
    for r in 0..rows {
        assert_eq!(plot.canvas.get(0, r).unwrap().glyph, ' ');
        assert_eq!(plot.canvas.get(2, r).unwrap().glyph, '█');
    }
    // 3.5 above the minimum: three full rows then a half block
    assert_eq!(plot.canvas.get(1, rows - 3).unwrap().glyph, '█');
    assert_eq!(plot.canvas.get(1, rows - 4).unwrap().glyph, '▄');
    assert_eq!(plot.canvas.get(1, rows - 5).unwrap().glyph, ' ');
}

#[test]
fn zero_renders_blank_in_perzero_mode() {
    let y = [0.0, 3.0, -2.0, 0.0];
    let cfg = RenderConfig::builder()
        .perzero(true)
        .color(false)
        .build()
        .unwrap();
    let plot = Plot::new(&Series::single(&y), &cfg).unwrap();
    for r in 0..plot.canvas.rows() {
        for x in [0, 3] {
            assert_eq!(plot.canvas.get(x, r).unwrap().glyph, ' ');
        }
    }
}

#[test]
fn swapping_series_swaps_only_colors() {
    let a = [4.3, 1.0, 7.75, 2.2, 6.0];
    let b = [2.1, 3.6, 7.0, 5.9, 0.4];
    let cfg = plain();
    let ab = Plot::new(&Series::dual(&a, &b), &cfg).unwrap();
    let ba = Plot::new(&Series::dual(&b, &a), &cfg).unwrap();
    assert_eq!(ab.canvas.shape(), ba.canvas.shape());

    let swap = |lane: Lane| match lane {
        Lane::Primary => Lane::Auxiliary,
        Lane::Auxiliary => Lane::Primary,
    };
    for r in 0..ab.canvas.rows() {
        for x in 0..ab.canvas.columns() {
            let (p, q) = (ab.canvas.get(x, r).unwrap(), ba.canvas.get(x, r).unwrap());
            assert_eq!((p.glyph, p.reverse), (q.glyph, q.reverse));
            let swapped = match p.ink {
                Ink::Background => Ink::Background,
                Ink::Series(l) => Ink::Series(swap(l)),
                Ink::Transition(l) => Ink::Transition(swap(l)),
            };
            assert_eq!(swapped, q.ink);
        }
    }
}

#[test]
fn transitions_only_where_the_far_bar_reaches_past_threshold() {
    // primary ends at .5 in the top row; auxiliary has .7 / .6 left there
    let a = [1.5, 1.5];
    let b = [1.7, 1.6];
    let cfg = RenderConfig::builder().y_extrema(0.0, 2.0).build().unwrap();
    let plot = Plot::new(&Series::dual(&a, &b), &cfg).unwrap();
    assert_eq!(
        plot.canvas.get(0, 0).unwrap().ink,
        Ink::Transition(Lane::Primary)
    );
    assert_eq!(plot.canvas.get(1, 0).unwrap().ink, Ink::Series(Lane::Primary));
}

#[test]
fn nocolor_keeps_glyph_placement() {
    let a = [-3.2, 1.5, 4.0, -0.5];
    let b = [2.0, -1.25, 3.3, -2.8];
    let colored = RenderConfig::builder()
        .perzero(true)
        .limits(true)
        .tick(true)
        .build()
        .unwrap();
    let plain = RenderConfig {
        color: false,
        ..colored.clone()
    };
    let with = render(&Series::dual(&a, &b), &colored).unwrap();
    let without = render(&Series::dual(&a, &b), &plain).unwrap();
    assert!(with.contains("\x1b[38;5;"));
    assert!(!without.contains("\x1b[38;5;"));
    assert_eq!(strip_ansi(&with), strip_ansi(&without));
}

#[test]
fn no_grid_means_no_filler() {
    let y = [0.5, 9.0, 4.0, 2.5, 7.25];
    let text = render(&Series::single(&y), &plain()).unwrap();
    assert!(!text.contains(['-', '|', '+']));

    let cfg = RenderConfig::builder()
        .color(false)
        .grid(2, 2)
        .build()
        .unwrap();
    let text = render(&Series::single(&y), &cfg).unwrap();
    assert!(text.lines().next().unwrap().contains('|'));
}

#[test]
fn scenario_zero_four_eight() {
    let text = render(&Series::single(&[0.0, 4.0, 8.0]), &plain()).unwrap();
    let expected = ["  █", "  █", "  █", "  █", " ██", " ██", " ██", " ██"].join("\n");
    assert_eq!(text, expected);
}

#[test]
fn labelled_output_layout() {
    let cfg = RenderConfig::builder()
        .color(false)
        .limits(true)
        .build()
        .unwrap();
    let text = render(&Series::single(&[1.0, 3.0]), &cfg).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], " 3.00    █");
    assert_eq!(lines[1], " 1.00    █");
    let pad = " ".repeat(8);
    assert_eq!(lines[2], format!("{pad}0.00{pad}{pad}1.00"));
}

#[test]
fn fit_then_render() {
    let y: Vec<f64> = (0..50).map(f64::from).collect();
    let scaled = Fit::new(20, 10).apply(&Series::single(&y)).unwrap();
    assert_eq!(scaled.primary.len(), 20);

    let (lo, hi) = scaled.y_limits;
    let cfg = RenderConfig::builder()
        .color(false)
        .limits(true)
        .y_limits(lo, hi)
        .y_extrema_opt(scaled.y_extrema)
        .build()
        .unwrap();
    let text = render(&scaled.series(), &cfg).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // labels keep the unscaled bounds of the full data
    assert!(lines[0].starts_with(" 49.00  "));
    assert!(lines.iter().all(|l| l.chars().count() <= 8 + 24));
}

#[test]
fn one_shot_fit_stays_inside_the_area() {
    let y: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.5).collect();
    let aux: Vec<f64> = y.iter().map(|v| 49.5 - v).collect();
    let text = fit_and_render(&y, Some(&aux), 40, 12).unwrap();
    let plain = strip_ansi(&text);
    let lines: Vec<&str> = plain.lines().collect();
    // 12 rows minus the two reserved for labels, plus the X axis row
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with(" 49.50  "));
    assert!(lines.iter().all(|l| l.chars().count() <= 40));
    assert!(matches!(
        fit_and_render(&[2.0, 2.0], None, 40, 12),
        Err(PlotError::Scale)
    ));
}
