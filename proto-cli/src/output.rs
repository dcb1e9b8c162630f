//! Output formats
//!
//! Every format runs the pipeline as far as it needs and serializes that stage:
//!
//! | format   | output                                     |
//! |----------|--------------------------------------------|
//! | `tokens` | token stream after indentation, as json    |
//! | `cst`    | parse tree, as json                        |
//! | `ast`    | compiled document with ids, as json        |
//! | `routes` | route metadata, as json                    |
//! | `html`   | rendered markup                            |
//! | `errors` | every diagnostic of compile and render, as json |
//!
//! Diagnostics of the stages that ran are returned next to the output.

use proto_config::ProtoConfig;
use proto_parser::proto::lexing::tokenize_with;
use proto_parser::proto::parsing::parse;
use proto_parser::{compile_with, ProtoError};
use proto_render::{get_route_metadata, render};
use serde::Serialize;

pub const FORMATS: [&str; 6] = ["tokens", "cst", "ast", "routes", "html", "errors"];

pub struct Output {
    pub text: String,
    pub diagnostics: Vec<ProtoError>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn produce(
    format: &str,
    source: &str,
    config: &ProtoConfig,
    screen: Option<&str>,
) -> Result<Output, serde_json::Error> {
    let compile_options = config.compile_options();

    match format {
        "tokens" => {
            let lexed = tokenize_with(source, compile_options.tab_width);
            Ok(Output {
                text: to_json(&lexed.tokens)?,
                diagnostics: lexed.errors.iter().map(ProtoError::from).collect(),
            })
        }
        "cst" => {
            let lexed = tokenize_with(source, compile_options.tab_width);
            let parsed = parse(&lexed.tokens);
            let mut diagnostics: Vec<ProtoError> =
                lexed.errors.iter().map(ProtoError::from).collect();
            diagnostics.extend(parsed.errors.iter().map(ProtoError::from));
            Ok(Output {
                text: to_json(&parsed.tree)?,
                diagnostics,
            })
        }
        _ => {
            let compiled = compile_with(source, None, &compile_options);
            let mut diagnostics = compiled.errors;
            let text = match format {
                "ast" => to_json(&compiled.document)?,
                "routes" => to_json(&get_route_metadata(&compiled.document, screen))?,
                _ => {
                    let mut options = config.render_options();
                    options.current_screen = screen.map(str::to_string);
                    let rendered = render(&compiled.document, &options);
                    diagnostics.extend(rendered.errors);
                    if format == "errors" {
                        to_json(&diagnostics)?
                    } else {
                        rendered.html
                    }
                }
            };
            Ok(Output { text, diagnostics })
        }
    }
}
