use donations::donations::run;

/// Build one pipe-delimited row of the 21-column FEC schema, with only the
/// consumed columns filled in.
fn row(cmte_id: &str, name: &str, zip: &str, date: &str, amount: &str, other_id: &str) -> String {
    let mut fields = vec![""; 21];
    fields[0] = cmte_id;
    fields[7] = name;
    fields[10] = zip;
    fields[13] = date;
    fields[14] = amount;
    fields[15] = other_id;
    fields.join("|")
}

fn process_and_dump(input: &str, percentile: &str) -> String {
    let mut output = Vec::<u8>::new();
    run(
        input.as_bytes(),
        &mut output,
        percentile.parse().unwrap(),
        1000,
    )
    .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn empty_input() {
    assert_eq!(process_and_dump("", "30"), "");
}

#[test]
fn single_donation_is_not_a_repeat() {
    let input = row("C001", "SMITH, JOHN", "12345", "01312017", "100.00", "");
    assert_eq!(process_and_dump(&input, "30"), "");
}

#[test]
fn second_donation_same_campaign_year() {
    let input = [
        row("C001", "SMITH, JOHN", "12345", "01312017", "100.00", ""),
        row("C001", "SMITH, JOHN", "12345", "02152017", "250.50", ""),
    ]
    .join("\n");
    // The seeding donation never aggregates; the campaign holds [250.50]
    // and 250.5 rounds half-to-even to 250.
    assert_eq!(process_and_dump(&input, "50"), "C001|12345|2017|250|250.50|1\n");
}

#[test]
fn other_id_record_is_ignored_entirely() {
    // The first record comes from a committee, not an individual. It must
    // not count towards SMITH's history, so the second record is still a
    // first donation.
    let input = [
        row("C001", "SMITH, JOHN", "12345", "01312017", "100.00", "H6CA34245"),
        row("C001", "SMITH, JOHN", "12345", "02152017", "250.50", ""),
    ]
    .join("\n");
    assert_eq!(process_and_dump(&input, "50"), "");
}

#[test]
fn out_of_order_year_never_aggregates() {
    let input = [
        row("C001", "SMITH, JOHN", "12345", "01312016", "100", ""),
        row("C001", "SMITH, JOHN", "12345", "01312015", "200", ""),
    ]
    .join("\n");
    assert_eq!(process_and_dump(&input, "30"), "");
}

#[test]
fn running_percentile_over_growing_campaign() {
    // The first donation seeds the donor's history; the next four qualify
    // and build the campaign collection [10, 20, 30, 40] step by step.
    let input = [
        row("C002", "DOE, JANE", "02895", "01012017", "5", ""),
        row("C002", "DOE, JANE", "02895", "02012017", "10", ""),
        row("C002", "DOE, JANE", "02895", "03012017", "20", ""),
        row("C002", "DOE, JANE", "02895", "04012017", "30", ""),
        row("C002", "DOE, JANE", "02895", "05012017", "40", ""),
    ]
    .join("\n");
    assert_eq!(
        process_and_dump(&input, "50"),
        [
            "C002|02895|2017|10|10|1",
            "C002|02895|2017|10|30|2",
            "C002|02895|2017|20|60|3",
            "C002|02895|2017|20|100|4",
            ""
        ]
        .join("\n")
    );
}

#[test]
fn hundredth_percentile_is_the_maximum() {
    let input = [
        row("C002", "DOE, JANE", "02895", "01012017", "40", ""),
        row("C002", "DOE, JANE", "02895", "02012017", "10", ""),
        row("C002", "DOE, JANE", "02895", "03012017", "25", ""),
    ]
    .join("\n");
    assert_eq!(
        process_and_dump(&input, "100"),
        ["C002|02895|2017|10|10|1", "C002|02895|2017|25|35|2", ""].join("\n")
    );
}

#[test]
fn nine_digit_zips_share_the_five_digit_key() {
    let input = [
        row("C001", "PEREZ, JOHN A", "900172358", "01032017", "40", ""),
        row("C001", "PEREZ, JOHN A", "900171234", "01042017", "60", ""),
    ]
    .join("\n");
    assert_eq!(process_and_dump(&input, "30"), "C001|90017|2017|60|60|1\n");
}

#[test]
fn short_zip_records_are_skipped() {
    let input = [
        row("C001", "SMITH, JOHN", "1234", "01312017", "100", ""),
        row("C001", "SMITH, JOHN", "1234", "02152017", "200", ""),
    ]
    .join("\n");
    assert_eq!(process_and_dump(&input, "30"), "");
}

#[test]
fn donors_and_campaigns_interleave() {
    let input = [
        row("C001", "SMITH, JOHN", "12345", "01312017", "100", ""),
        row("C002", "DOE, JANE", "54321", "01312017", "50", ""),
        row("C001", "SMITH, JOHN", "12345", "02152017", "300", ""),
        row("C002", "DOE, JANE", "54321", "02152017", "70", ""),
        // Same donor, different committee: donor history is shared, the
        // campaign collection is not.
        row("C003", "SMITH, JOHN", "12345", "03012017", "20", ""),
    ]
    .join("\n");
    assert_eq!(
        process_and_dump(&input, "100"),
        [
            "C001|12345|2017|300|300|1",
            "C002|54321|2017|70|70|1",
            "C003|12345|2017|20|20|1",
            ""
        ]
        .join("\n")
    );
}

#[test]
fn output_is_deterministic_across_buffer_sizes() {
    let input = (0..25)
        .map(|i| {
            row(
                "C001",
                "SMITH, JOHN",
                "12345",
                "01312017",
                &format!("{}.25", i + 1),
                "",
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let dump = |buffer_size| {
        let mut output = Vec::<u8>::new();
        run(input.as_bytes(), &mut output, "30".parse().unwrap(), buffer_size).unwrap();
        String::from_utf8(output).unwrap()
    };

    let reference = dump(1000);
    assert_eq!(reference.lines().count(), 24);
    assert_eq!(dump(1), reference);
    assert_eq!(dump(7), reference);
    assert_eq!(dump(1000), reference);
}

#[test]
fn too_few_fields_aborts_the_run() {
    let input = [
        row("C001", "SMITH, JOHN", "12345", "01312017", "100", ""),
        "C001|N|M2".to_string(),
    ]
    .join("\n");
    let error = run(input.as_bytes(), &mut Vec::new(), "30".parse().unwrap(), 1000).unwrap_err();
    assert!(error.to_string().contains("requires at least"));
}

#[test]
fn non_numeric_amount_aborts_the_run() {
    let input = row("C001", "SMITH, JOHN", "12345", "01312017", "1O0.00", "");
    let error = run(input.as_bytes(), &mut Vec::new(), "30".parse().unwrap(), 1000).unwrap_err();
    assert!(error.to_string().contains("is not numeric"));
}

#[test]
fn zero_buffer_size_is_a_configuration_error() {
    let error = run("".as_bytes(), &mut Vec::new(), "30".parse().unwrap(), 0).unwrap_err();
    assert!(error.to_string().contains("positive"));
}
