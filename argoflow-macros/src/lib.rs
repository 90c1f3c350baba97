use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::spanned::Spanned;
use syn::{parse_macro_input, ItemFn};

/// Captures a function's body text at compile time.
///
/// Emits the annotated function unchanged, plus a `static` named
/// `<FN_NAME>_SCRIPT` holding the literal body source (signature and outer
/// braces excluded), the sanitized function name, and the definition site.
/// The static inherits the function's visibility.
///
/// ```ignore
/// #[workflow_script]
/// fn train_model() {
///     println!("training...");
/// }
///
/// assert_eq!(TRAIN_MODEL_SCRIPT.name, "train-model");
/// ```
#[proc_macro_attribute]
pub fn workflow_script(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);

    let fn_name = func.sig.ident.to_string();
    let script_name = safe_name(&fn_name);
    let static_ident = format_ident!("{}_SCRIPT", fn_name.to_uppercase());
    let vis = &func.vis;
    let body = body_text(&func);

    let expanded = quote! {
        #func

        #vis static #static_ident: argoflow_sdk::Script = argoflow_sdk::Script {
            name: #script_name,
            body: #body,
            file: file!(),
            line: line!(),
        };
    };

    TokenStream::from(expanded)
}

/// Body source of `func`, outer braces stripped and dedented.
fn body_text(func: &ItemFn) -> String {
    let span: proc_macro2::Span = func.block.span();
    match span.source_text() {
        Some(snippet) => strip_block(&snippet),
        // No source snippet available (e.g. tokens produced by another
        // macro); fall back to the token rendering, which loses the
        // original formatting.
        None => render_statements(func),
    }
}

fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' | '.' => '-',
            other => other,
        })
        .collect()
}

fn strip_block(snippet: &str) -> String {
    let trimmed = snippet.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);
    dedent(inner)
}

fn dedent(text: &str) -> String {
    let all_lines: Vec<&str> = text.lines().collect();
    let lines = trim_blank_edges(&all_lines);

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.len() >= indent {
                &line[indent..]
            } else {
                line.trim_start()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_blank_edges<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map(|idx| idx + 1)
        .unwrap_or(start);
    lines[start..end].to_vec()
}

fn render_statements(func: &ItemFn) -> String {
    func.block
        .stmts
        .iter()
        .map(|stmt| stmt.to_token_stream().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
