//! Test fixtures - template files as a host build would hand them over

use ng_http2js_core::file::InputFile;

pub fn simple_template() -> InputFile {
    InputFile::new("src/app/a.html", "<div>hello</div>")
}

pub fn multiline_template() -> InputFile {
    InputFile::new(
        "src/app/list.html",
        "<ul>\r\n  <li ng-repeat=\"item in items\">{{item}}</li>\r\n</ul>\n",
    )
}

/// Content with every character the escaper rewrites
pub fn special_characters_template() -> InputFile {
    InputFile::new("src/app/special.html", "a\\b'c\r\nd")
}

pub fn windows_path_template() -> InputFile {
    InputFile::new("src\\app\\win.html", "<p>win</p>")
}

pub fn empty_file(path: &str) -> InputFile {
    InputFile::null(path)
}

pub fn streaming_file(path: &str) -> InputFile {
    InputFile::stream(path, std::io::Cursor::new(b"<p>stream</p>".to_vec()))
}

/// `count` small buffered templates named `tpl0.html`, `tpl1.html`, ...
pub fn numbered_templates(count: usize) -> Vec<InputFile> {
    (0..count)
        .map(|i| InputFile::new(format!("tpl{}.html", i), format!("<p>{}</p>", i)))
        .collect()
}
