use super::figure::ColorField;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const UPDATE_SCRIPT: &str = r#"
const plot = document.getElementById("scatter-plot");
const select = document.getElementById("color-dropdown");

Plotly.newPlot(plot, initialFigure.data, initialFigure.layout);

select.addEventListener("change", async () => {
    const response = await fetch("/dashboard/figure?color=" + encodeURIComponent(select.value));
    if (!response.ok) {
        console.error("Unable to load figure", response.status);
        return;
    }
    const figure = await response.json();
    Plotly.react(plot, figure.data, figure.layout);
});
"#;

/// Dashboard page. `initial_figure` is the serialized default figure, drawn before any
/// dropdown change.
pub fn dashboard_page(initial_figure: &str) -> Markup {
    // keep the JSON from closing the script element early
    let initial_figure = initial_figure.replace("</", "<\\/");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Expense Dashboard" }
                script src=(PLOTLY_JS) {}
            }
            body {
                h1 { "Interactive Plotly Visualization" }
                div #scatter-plot {}
                label for="color-dropdown" { "Select Color Variable:" }
                select #color-dropdown {
                    @for field in ColorField::ALL {
                        option value=(field.as_str()) selected[field == ColorField::Species] {
                            (field.label())
                        }
                    }
                }
                script {
                    (PreEscaped(format!("const initialFigure = {};", initial_figure)))
                    (PreEscaped(UPDATE_SCRIPT))
                }
            }
        }
    }
}
