use crate::composer::ReportComposer;

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5.4.2/dist/echarts.min.js";
const CHART_WIDTH_PX: u32 = 500;
const CHART_HEIGHT_PX: u32 = 300;

/// Lays out every chart of `composer` as a table with one row per title and
/// one column per profile. Cells without a chart keep their caption.
pub fn render_page(composer: &ReportComposer, page_title: &str) -> Result<String, serde_json::Error> {
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <script type=\"text/javascript\" src=\"{ECHARTS_SCRIPT}\"></script>\n</head>\n<body>\n<table>\n",
        escape(page_title)
    );

    let profiles = composer.list_profiles();
    for title in composer.list_titles() {
        html.push_str("<tr>\n");
        for profile in &profiles {
            html.push_str("  <td style='vertical-align:text-top'>\n");
            html.push_str(&format!(
                "    <p align='center'><b><i>{}</i><br/>{}</b></p>\n",
                escape(profile),
                escape(&title)
            ));
            if let Some(chart_view) = composer.lookup(profile, &title) {
                html.push_str(&format!(
                    "    <div id=\"{}\" style=\"width: {CHART_WIDTH_PX}px; height: {CHART_HEIGHT_PX}px;\"></div>\n",
                    chart_view.div_id
                ));
            }
            html.push_str("  </td>\n");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n<script type=\"text/javascript\">\n");

    for chart_view in composer.iter() {
        // Titles come from measurement files and must not close the script.
        let options = serde_json::to_string(&chart_view.chart.inner)?.replace("</", "<\\/");
        let theme = if chart_view.chart.dark { ", 'dark'" } else { "" };
        html.push_str(&format!(
            "echarts.init(document.getElementById('{}'){theme}).setOption({options});\n",
            chart_view.div_id
        ));
    }

    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
