//! `/`

use chrono::Local;
use maud::{Markup, PreEscaped, html};

use super::{Metadata, page};
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

pub async fn index(_req: Request) -> Response {
    let rendered_at = Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();

    let content = html! {
        main {
            h1 { "Next.js 15 Learning Journey" }
            p {
                "Welcome to our comprehensive Next.js 15 learning project. This page is rendered on the server at: "
                strong { (rendered_at) }
            }
            div.grid {
                div.card {
                    h2 { "🚀 Server Components" }
                    p { "This page runs on the server and renders its data directly into the markup." }
                }
                div.card {
                    h2 { "🎯 App Router" }
                    p { "Every page here is registered with file-based route notation." }
                }
                div.card {
                    h2 { "⚡ React Compiler" }
                    p { "Automatic optimizations with React Compiler enabled for better performance." }
                }
            }
            h2 { "Server vs Client Components Demo" }
            div.grid {
                div.card {
                    h3 { "🖥️ Server Component Info" }
                    p { "This content is rendered on the server at request time." }
                    p { "Rendered: " (rendered_at) }
                    p { small { "Refresh the page to see the timestamp update" } }
                }
                (counter())
            }
            h2 { "Learning Modules" }
            ol {
                @for module in site::LEARNING_MODULES {
                    li { (module) }
                }
            }
            p {
                a href="https://nextjs.org/docs" target="_blank" rel="noopener noreferrer" { "📚 Next.js Documentation" }
                " · "
                a href="https://react.dev" target="_blank" rel="noopener noreferrer" { "⚛️ React Docs" }
            }
        }
    };

    page(&Metadata::default(), "/", content)
}

/// The interactive counter; state lives in the browser.
fn counter() -> Markup {
    html! {
        div.card #counter {
            h2 { "🎮 Interactive Counter (Client Component)" }
            output #count { "0" }
            div {
                button type="button" data-step="-1" { "-1" }
                button type="button" data-step="0" { "Reset" }
                button type="button" data-step="1" { "+1" }
            }
            p { "This widget keeps its state in the browser, so it needs client-side script." }
            script {
                (PreEscaped(r#"
(() => {
  const out = document.getElementById('count');
  let count = 0;
  document.querySelectorAll('#counter button').forEach((button) => {
    button.addEventListener('click', () => {
      const step = Number(button.dataset.step);
      count = step === 0 ? 0 : count + step;
      out.textContent = count;
    });
  });
})();
"#))
            }
        }
    }
}
