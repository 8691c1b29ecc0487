//! Unit tests for box, bar, sparkline and table rendering

use ratatui::style::Color;

use dashkit::text::{strip_control, visible_width};
use dashkit::widgets::Fill;
use dashkit::{
    Align, BarConfig, BarStyle, BorderBox, BoxConfig, BoxStyle, ColumnSpec, Palette, ProgressBar,
    SparkConfig, Sparkline, Table, TableConfig,
};

fn lines(data: &[&str]) -> Vec<String> {
    data.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// BorderBox
// ============================================================================

#[test]
fn box_lines_all_have_the_box_width() {
    let config = BoxConfig::from_palette(&Palette::default(), 20).with_title("Disk");
    let b = BorderBox::new(
        config,
        lines(&["\x1b[32m/ 41%\x1b[0m", "/home 93% and a long tail", "日本語"]),
    );
    for line in b.render_lines() {
        assert_eq!(visible_width(&line), 20, "line {:?}", line);
    }
}

#[test]
fn box_title_fits_exactly_into_eight_inner_columns() {
    let square = |title: &str| {
        let config = BoxConfig {
            style: BoxStyle::SQUARE,
            ..BoxConfig::from_palette(&Palette::default(), 10)
        }
        .with_title(title);
        BorderBox::new(config, vec![])
    };

    let b = square("ABCD");
    assert!(b.title_fits());
    assert_eq!(strip_control(&b.render_lines()[0]), "┌─ ABCD ─┐");

    let b = square("ABCDE");
    assert!(!b.title_fits());
    assert_eq!(strip_control(&b.render_lines()[0]), "┌────────┐");
}

#[test]
fn box_title_is_drawn_in_title_color() {
    let mut config = BoxConfig::from_palette(&Palette::default(), 16).with_title("Net");
    config.title_color = Some(Color::Yellow);
    let top = BorderBox::new(config, vec![]).render_lines().remove(0);
    assert!(top.contains("\x1b[33mNet\x1b[90m"));
    assert_eq!(strip_control(&top), "╭─ Net ────────╮");
}

#[test]
fn box_content_of_exact_width_is_not_padded() {
    let config = BoxConfig {
        style: BoxStyle::ASCII,
        ..BoxConfig::from_palette(&Palette::default(), 6)
    };
    let out = strip_control(&BorderBox::new(config, lines(&["abcd"])).render());
    assert_eq!(out, "+----+\n|abcd|\n+----+");
}

#[test]
fn box_double_style() {
    let config = BoxConfig {
        style: BoxStyle::DOUBLE,
        ..BoxConfig::from_palette(&Palette::default(), 5)
    };
    let out = strip_control(&BorderBox::new(config, lines(&["x"])).render());
    assert_eq!(out, "╔═══╗\n║x  ║\n╚═══╝");
}

// ============================================================================
// ProgressBar
// ============================================================================

#[test]
fn half_bar_has_no_partial_glyph() {
    let fill = Fill::quantize(10, 50.0);
    assert_eq!(
        fill,
        Fill {
            full: 5,
            partial: 0,
            empty: 5
        }
    );

    let config = BarConfig {
        style: BarStyle::BLOCK,
        show_value: false,
        ..BarConfig::from_palette(&Palette::default(), 10)
    };
    let out = strip_control(&ProgressBar::new(config, 50.0).render());
    assert_eq!(out, "█████░░░░░");
}

#[test]
fn partial_cell_uses_eighth_blocks() {
    // 4 cells = 32 eighths, 30% = 9.6 -> 9 eighths: one full, one 1/8
    let fill = Fill::quantize(4, 30.0);
    assert_eq!(
        fill,
        Fill {
            full: 1,
            partial: 1,
            empty: 2
        }
    );

    let config = BarConfig {
        style: BarStyle::BLOCK,
        show_value: false,
        ..BarConfig::from_palette(&Palette::default(), 4)
    };
    assert_eq!(
        strip_control(&ProgressBar::new(config, 30.0).render()),
        "█▏░░"
    );
}

#[test]
fn out_of_range_percentages_are_clamped() {
    let config = BarConfig::from_palette(&Palette::default(), 7);
    assert_eq!(ProgressBar::new(config.clone(), -20.0).percent(), 0.0);
    assert_eq!(ProgressBar::new(config.clone(), 180.0).percent(), 100.0);
    assert_eq!(ProgressBar::new(config, f64::NAN).percent(), 0.0);
}

#[test]
fn bar_value_suffix_is_right_aligned() {
    let config = BarConfig {
        style: BarStyle::ASCII,
        ..BarConfig::from_palette(&Palette::default(), 7)
    };
    let render = |p: f64| strip_control(&ProgressBar::new(config.clone(), p).render());
    assert_eq!(render(0.0), "[-----]   0%");
    assert_eq!(render(42.0), "[##---]  42%");
    assert_eq!(render(100.0), "[#####] 100%");
}

#[test]
fn bar_colors_wrap_fill_and_empty_runs() {
    let config = BarConfig {
        style: BarStyle::ASCII,
        show_value: false,
        ..BarConfig::from_palette(&Palette::default(), 6)
    };
    let out = ProgressBar::new(config, 50.0).render();
    assert_eq!(out, "[\x1b[32m##\x1b[0m\x1b[90m--\x1b[0m]");
}

// ============================================================================
// Sparkline
// ============================================================================

#[test]
fn flat_series_draws_lowest_level_everywhere() {
    let spark = Sparkline::new(SparkConfig::from_palette(&Palette::default(), 4), vec![5.0; 4]);
    assert_eq!(spark.levels(), vec![0, 0, 0, 0]);
    assert_eq!(strip_control(&spark.render()), "▁▁▁▁");
}

#[test]
fn only_the_newest_samples_are_drawn() {
    let samples = vec![100.0, 0.0, 7.0, 14.0];
    let spark = Sparkline::new(SparkConfig::from_palette(&Palette::default(), 2), samples);
    assert_eq!(spark.window(), &[7.0, 14.0]);
    assert_eq!(strip_control(&spark.render()), "▁█");
}

#[test]
fn sparkline_output_is_exactly_width_columns() {
    for samples in [vec![], vec![1.0], vec![3.0, 1.0, 2.0], vec![1.0; 30]] {
        let spark = Sparkline::new(SparkConfig::from_palette(&Palette::default(), 10), samples);
        assert_eq!(visible_width(&spark.render()), 10);
    }
}

// ============================================================================
// Table
// ============================================================================

#[test]
fn table_rows_fill_the_budget_with_styled_cells() {
    let columns = vec![
        ColumnSpec::auto("UNIT", Align::Left),
        ColumnSpec::flex("STATUS", 6, Align::Center),
        ColumnSpec::fixed("MEM", 6, Align::Right),
    ];
    let rows = vec![
        lines(&["nginx", "\x1b[32mactive\x1b[0m", "12M"]),
        lines(&["postgres", "\x1b[31mfailed\x1b[0m", "1.1G"]),
    ];
    let config = TableConfig::from_palette(&Palette::default(), 40);
    let out = Table::new(config, columns, rows).render();

    let plain: Vec<String> = out.lines().map(strip_control).collect();
    assert_eq!(plain.len(), 4);
    for line in &plain {
        assert_eq!(visible_width(line), 40, "line {:?}", line);
    }
    assert_eq!(plain[2], "nginx             active             12M");
}
