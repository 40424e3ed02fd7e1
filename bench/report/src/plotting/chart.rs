use crate::series_statistics::SeriesStatistics;
use charming::{
    component::{
        Axis, DataView, DataZoom, DataZoomType, Feature, Grid, Legend, LegendSelectedMode,
        LegendType, Restore, SaveAsImage, Title, Toolbox, ToolboxDataZoom,
    },
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, ItemStyle, LineStyle,
        NameLocation, Orient, SplitLine, TextAlign, TextStyle, Tooltip,
    },
    series::Line,
    Chart,
};
use human_repr::HumanCount;

pub struct WorkloadChart {
    pub inner: Chart,
    /// Draw with the echarts built-in dark theme.
    pub dark: bool,
}

const AXIS_TEXT_SIZE: u32 = 12;

impl WorkloadChart {
    /// Create a new `WorkloadChart` with default tooltip, legend, grid, and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool) -> Self {
        let chart = Chart::new()
            .title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(14).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(10))
                    .left("50%")
                    .top("1%"),
            )
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("1%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(10))
                    .item_gap(6)
                    .item_width(18)
                    .item_height(10)
                    .type_(LegendType::Scroll),
            )
            .grid(Grid::new().left("12%").right("30%").top("18%").bottom("16%"))
            .data_zoom(
                DataZoom::new()
                    .show(true)
                    .type_(DataZoomType::Slider)
                    .bottom("2%")
                    .start(0)
                    .end(100),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_zoom(ToolboxDataZoom::new())
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart, dark }
    }

    /// Draws `columns[1..]` against `columns[0]`, one line per column, using
    /// the colour at the same position in `colors`.
    pub fn from_columns(
        title: &str,
        columns: &[SeriesStatistics],
        colors: &[&str],
        dark: bool,
    ) -> Self {
        let Some((x_column, series)) = columns.split_first() else {
            return Self::new(title, "", dark);
        };

        let samples: usize = series.iter().map(|s| s.len()).sum();
        let subtext = format!(
            "{} series  •  {} samples",
            series.len(),
            samples.human_count_bare()
        );

        let mut chart = Self::new(title, &subtext, dark)
            .with_value_x_axis(&x_column.title)
            .with_y_axis("ops/s");
        for (index, column) in series.iter().enumerate() {
            let points = x_column
                .data
                .iter()
                .zip(&column.data)
                .map(|(x, y)| vec![*x, *y])
                .collect();
            chart = chart.add_line_series(&column.title, points, colors.get(index).copied(), 1.0);
        }
        chart
    }

    /// Configure the X axis as a numeric axis (time or thread count).
    pub fn with_value_x_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure a Y axis for e.g. operations per second.
    pub fn with_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Add a new line series to the chart.
    ///
    /// `name` is displayed in the legend. `points` is a list of `[x, y]` pairs.
    /// `opacity` controls the line opacity (use e.g. 1.0 for solid line, 0.3 for translucent).
    pub fn add_line_series(
        mut self,
        name: &str,
        points: Vec<Vec<f64>>,
        color: Option<&str>,
        opacity: f64,
    ) -> Self {
        let mut line = Line::new()
            .name(name)
            .data(points)
            .show_symbol(false)
            .emphasis(Emphasis::new())
            .line_style(LineStyle::new().width(2).opacity(opacity));

        if let Some(color) = color {
            line = line.item_style(ItemStyle::new().color(color));
        }

        self.inner = self.inner.series(line);
        self
    }
}
