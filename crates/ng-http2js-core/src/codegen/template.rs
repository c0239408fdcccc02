//! Renders the `requests.js` registration module

use super::Request;

const INDENT: &str = "  ";

/// Emits the module text line by line
struct ModuleWriter {
    output: String,
    indent_level: usize,
}

impl ModuleWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_line(&mut self, parts: &[&str]) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
        for part in parts {
            self.output.push_str(part);
        }
        self.output.push('\n');
    }

    fn write_put(&mut self, request: &Request) {
        self.write_line(&["cache.put('", &request.uri, "',"]);
        self.indent();
        self.write_line(&["'", &request.escaped_content, "');"]);
        self.dedent();
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Render the registration module for `requests`.
///
/// `module_name` and `cache_id` are inserted verbatim, as is each request's
/// uri. Content must already be escaped.
pub fn render_module(module_name: &str, cache_id: &str, requests: &[Request]) -> String {
    let body_len: usize = requests
        .iter()
        .map(|r| r.uri.len() + r.escaped_content.len() + 32)
        .sum();
    let mut writer = ModuleWriter::with_capacity(192 + module_name.len() + body_len);

    writer.write_line(&["(function(module) {"]);
    writer.write_line(&[
        "angular.module('",
        module_name,
        "', []).run(['$cacheFactory', function($cacheFactory) {",
    ]);
    writer.indent();
    writer.write_line(&["var cache = $cacheFactory('", cache_id, "');"]);
    for request in requests {
        writer.write_put(request);
    }
    writer.dedent();
    writer.write_line(&["}]);"]);
    writer.write_line(&["})();"]);

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_module() {
        let output = render_module("app", "$http", &[]);
        assert_eq!(
            output,
            "(function(module) {\n\
             angular.module('app', []).run(['$cacheFactory', function($cacheFactory) {\n\
             \x20\x20var cache = $cacheFactory('$http');\n\
             }]);\n\
             })();\n"
        );
    }

    #[test]
    fn test_put_statement_layout() {
        let requests = vec![Request::new("a.html", "<b>\\'x\\'</b>")];
        let output = render_module("app", "tpl", &requests);
        assert!(output.contains("  cache.put('a.html',\n    '<b>\\'x\\'</b>');\n"));
        assert!(output.contains("$cacheFactory('tpl')"));
    }

    #[test]
    fn test_uri_is_not_escaped() {
        let requests = vec![Request::new("it's.html", "")];
        let output = render_module("app", "$http", &requests);
        assert!(output.contains("cache.put('it's.html',\n    '');"));
    }
}
