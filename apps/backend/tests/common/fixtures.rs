//! Fixture chapters written into the test content directory.

use std::path::Path;

pub const ASYNC_PROGRAMMING_MD: &str = r##"# Async Programming

Note: start with callbacks

![loop](./images/event-loop.png)
<!--slide-->
<!-- .slide: class="questionSlide" -->
## Exercise
What does `Promise.all` return?
<!--slide-->
<!-- .slide: class="responseSlide" -->
A promise of an array
<!--section-->
## Async functions
![chart](./images/missing-chart.svg)
"##;

pub const STRINGS_MD: &str = "# Strings\n\nTemplate literals and more.\n";

pub const DRAFT_MD: &str = "Work in progress, no title yet.\n";

pub const EVENT_LOOP_PNG: &[u8] = b"not really a png";

/// Write chapters and images into `root`.
pub fn write_content(root: &Path) {
    std::fs::write(root.join("AsyncProgramming.md"), ASYNC_PROGRAMMING_MD).unwrap();
    std::fs::write(root.join("Strings.md"), STRINGS_MD).unwrap();
    std::fs::write(root.join("Draft.md"), DRAFT_MD).unwrap();

    let images = root.join("images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("event-loop.png"), EVENT_LOOP_PNG).unwrap();
}
