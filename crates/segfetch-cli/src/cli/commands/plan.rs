//! Plan command: print the requests a fetch would issue.

use super::input::{fetch_options, load_descriptor};
use anyhow::{Context, Result};
use segfetch_core::config::SegfetchConfig;
use segfetch_core::FetchPlan;
use std::fmt::Write;
use std::path::Path;

/// Human-readable listing of a plan: a header line, then one line per request.
pub(crate) fn render_plan(plan: &FetchPlan) -> String {
    let mut out = String::new();
    match plan {
        FetchPlan::ByteRanges { url, walk } => {
            let _ = writeln!(
                out,
                "byte_ranges {} ({} bytes, {} windows of {})",
                url,
                walk.total_len(),
                walk.window_count(),
                walk.window_size()
            );
            for (i, w) in walk.clone().enumerate() {
                let _ = writeln!(out, "{:>5}  {}", i + 1, w.range().header_value());
            }
        }
        FetchPlan::Segments {
            initialization_url,
            segment_urls,
            size_cap,
        } => {
            let _ = write!(out, "segments ({} requests", plan.request_count());
            if let Some(cap) = size_cap {
                let _ = write!(out, ", capped at {} bytes", cap);
            }
            let _ = writeln!(out, ")");
            if let Some(init) = initialization_url {
                let _ = writeln!(out, " init  {}", init);
            }
            for (i, u) in segment_urls.iter().enumerate() {
                let _ = writeln!(out, "{:>5}  {}", i + 1, u);
            }
        }
    }
    out
}

pub async fn run_plan(cfg: &SegfetchConfig, format: &Path, test: bool) -> Result<()> {
    let descriptor = load_descriptor(format).await?;
    let plan = FetchPlan::new(&descriptor, fetch_options(cfg, test))
        .with_context(|| format!("plan {}", format.display()))?;
    print!("{}", render_plan(&plan));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use segfetch_core::{FetchOptions, MediaDescriptor, Strategy};

    #[test]
    fn renders_byte_range_windows() {
        let d = MediaDescriptor {
            base_url: "https://cdn.example.com/v.mp4".into(),
            filesize: Some(1000),
            strategy: Strategy::ByteRanges {
                initialization_range: "0-299".into(),
                incremental_bytes: 300,
            },
        };
        let plan = FetchPlan::new(&d, FetchOptions::default()).unwrap();
        let text = render_plan(&plan);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "byte_ranges https://cdn.example.com/v.mp4 (1000 bytes, 4 windows of 300)"
        );
        assert_eq!(
            &lines[1..],
            &[
                "    1  bytes=0-300",
                "    2  bytes=301-600",
                "    3  bytes=601-900",
                "    4  bytes=901-999",
            ]
        );
    }

    #[test]
    fn renders_resolved_segment_urls() {
        let d = MediaDescriptor {
            base_url: "https://cdn.example.com/dash/".into(),
            filesize: None,
            strategy: Strategy::Segments {
                initialization_url: Some("init.mp4".into()),
                segment_urls: vec!["s1.m4s".into(), "https://other.example.com/s2.m4s".into()],
            },
        };
        let plan = FetchPlan::new(&d, FetchOptions { size_cap: Some(10241) }).unwrap();
        let text = render_plan(&plan);
        assert!(text.starts_with("segments (3 requests, capped at 10241 bytes)\n"), "{text}");
        assert!(text.contains(" init  https://cdn.example.com/dash/init.mp4\n"));
        assert!(text.contains("    1  https://cdn.example.com/dash/s1.m4s\n"));
        assert!(text.contains("    2  https://other.example.com/s2.m4s\n"));
    }
}
