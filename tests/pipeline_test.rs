//! End-to-end tests for the file-to-file conversion pipeline.

use std::fs;

use linkpage::{
    convert_file, convert_file_with_options, Error, RenderOptions, StylePreset,
};

fn write_source(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("links.md");
    fs::write(&path, content).unwrap();
    path
}

/// Extract the generated body between the container div tags.
fn body_of(html: &str) -> &str {
    let div = html.find("<div").unwrap();
    let start = div + html[div..].find(">\n").unwrap() + 2;
    let end = start + html[start..].find("\n</div>").unwrap();
    &html[start..end]
}

#[test]
fn test_single_heading_with_items() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "# Title\n- [A](http://a)\n- [B](http://b)\n");
    let output = dir.path().join("index.html");

    let options = RenderOptions::new().with_style(StylePreset::Plain);
    convert_file_with_options(&input, &output, &options).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    let body = body_of(&html);
    assert_eq!(
        body,
        "<h1>Title</h1><ul>\
         <li><a href='http://a' target='_blank' rel='noreferrer'>A</a></li>\
         <li><a href='http://b' target='_blank' rel='noreferrer'>B</a></li>\
         </ul>"
    );
    // Exactly one closing wrapper, at the very end of the body.
    assert_eq!(body.matches("</ul>").count(), 1);
    assert!(body.ends_with("</ul>"));
}

#[test]
fn test_two_sections_each_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(
        &dir,
        "# First\n- [A](http://a)\n# Second\n- [B](http://b)\n",
    );
    let output = dir.path().join("index.html");

    let options = RenderOptions::new().with_style(StylePreset::Plain);
    convert_file_with_options(&input, &output, &options).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    let body = body_of(&html);
    assert_eq!(
        body,
        "<h1>First</h1><ul>\
         <li><a href='http://a' target='_blank' rel='noreferrer'>A</a></li>\
         </ul>\
         <h1>Second</h1><ul>\
         <li><a href='http://b' target='_blank' rel='noreferrer'>B</a></li>\
         </ul>"
    );
}

#[test]
fn test_items_only_have_no_opening_wrapper() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(
        &dir,
        "- [A](http://a)\n- [B](http://b)\n- [C](http://c)\n",
    );
    let output = dir.path().join("index.html");

    let options = RenderOptions::new().with_style(StylePreset::Plain);
    convert_file_with_options(&input, &output, &options).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    let body = body_of(&html);
    assert_eq!(body.matches("<ul>").count(), 0);
    assert_eq!(body.matches("</ul>").count(), 1);
    assert!(body.ends_with("</ul>"));
}

#[test]
fn test_document_ending_in_heading_gets_stray_close() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "# Links\n- [A](http://a)\n# Epilogue\n");
    let output = dir.path().join("index.html");

    let options = RenderOptions::new().with_style(StylePreset::Plain);
    convert_file_with_options(&input, &output, &options).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    let body = body_of(&html);
    assert!(body.ends_with("<h1>Epilogue</h1></ul>"));
    assert_eq!(body.matches("<ul>").count(), 1);
    assert_eq!(body.matches("</ul>").count(), 2);
}

#[test]
fn test_bootstrap_preset_classes_and_template() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "## Tools\n- [Docs](https://example.com)\n");
    let output = dir.path().join("index.html");

    convert_file(&input, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("bootstrap.min.css"));
    assert!(html.contains("cool links</title>"));
    assert!(html.contains("<h2 class='mt-4'>Tools</h2>"));
    assert!(html.contains("<li class='mb-1'><a class='link-offset-2 "));
    assert!(html.contains("href='https://example.com'"));
}

#[test]
fn test_missing_input_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.md");
    let output = dir.path().join("index.html");

    let result = convert_file(&input, &output);
    assert!(matches!(result, Err(Error::NotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "# Title\n");
    let output = dir.path().join("no-such-dir").join("index.html");

    let result = convert_file(&input, &output);
    assert!(matches!(result, Err(Error::Write { .. })));
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "# Title\n");
    let output = dir.path().join("index.html");
    fs::write(&output, "stale").unwrap();

    convert_file(&input, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}
