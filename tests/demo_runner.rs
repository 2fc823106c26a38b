use collection_patterns::{DemoConfig, DemoRunner, Section};

fn render(config: DemoConfig) -> String {
    let mut runner = DemoRunner::new(Vec::new(), DemoConfig { color: false, ..config });
    runner.run().expect("demo run failed");
    String::from_utf8(runner.into_inner()).expect("output is utf-8")
}

#[test]
fn test_full_run_prints_every_section() {
    let output = render(DemoConfig::default());
    for section in Section::ALL {
        assert!(
            output.contains(&format!("=== {} ===\n", section.title())),
            "missing heading for {}",
            section.name()
        );
    }
}

#[test]
fn test_collection_scenarios() {
    let output = render(DemoConfig {
        sections: vec![Section::Collections],
        ..DemoConfig::default()
    });

    let expected = [
        "  Sample: [1, 2, 3, 4, 5, 6, 7]",
        "  Set from [a, b, a]: {\"a\", \"b\"}",
        "  Reduce (sum): 28",
        "  Fold (product): 5040",
        "  Group by parity: {\"odd\": [1, 3, 5, 7], \"even\": [2, 4, 6]}",
        "  Zip with letters: [\"1-a\", \"2-b\", \"3-c\"]",
        "  Take 3: [1, 2, 3]",
        "  Drop 3: [4, 5, 6, 7]",
        "  Chunked (3): [[1, 2, 3], [4, 5, 6], [7]]",
        "  Windowed (size 3, step 2): [[1, 2, 3], [3, 4, 5], [5, 6, 7]]",
        "  Tokens: [\"hello\", \"world\", \"kotlin\", \"collections\"]",
        "  Appended 9: [1, 2, 3, 4, 5, 6, 7, 9]",
        "  Original afterwards: [1, 2, 3, 4, 5, 6, 7]",
    ];
    for line in expected {
        assert!(output.contains(&format!("{line}\n")), "missing line: {line}\n{output}");
    }
}

#[test]
fn test_partial_windows_from_config() {
    let config = DemoConfig::from_toml_str(
        r#"
sections = ["collections"]
color = false

[window]
partial = true
"#,
    )
    .unwrap();
    let output = render(config);
    assert!(output.contains(
        "  Windowed (size 3, step 2, partial): [[1, 2, 3], [3, 4, 5], [5, 6, 7], [7]]\n"
    ));
}

#[test]
fn test_language_feature_sections() {
    let output = render(DemoConfig {
        sections: vec![
            Section::Pipelines,
            Section::Delegation,
            Section::Builders,
            Section::Reflection,
            Section::Calculator,
        ],
        ..DemoConfig::default()
    });

    let expected = [
        "  Chained operations: [16, 36, 64]",
        "  Identical: true",
        "  Name changed from 'Unknown' to 'Alice'",
        "  Age changed from 0 to 25",
        "  Balance changed to 100",
        "  Rejected: write of -50 rejected by validator",
        "  Final balance: 100",
        "  <html><head><title>My Page</title></head><body><h1>Welcome</h1><p>This is a paragraph</p></body></html>",
        "  Type: Person, Is record: true, Is sealed: false",
        "  Type: Shape, Is record: false, Is sealed: true",
        "  15 / 3 = 5.0",
        "  10 / 0 -> Division by zero",
    ];
    for line in expected {
        assert!(output.contains(&format!("{line}\n")), "missing line: {line}\n{output}");
    }
}
