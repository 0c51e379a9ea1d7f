use occurrence_codes::{convert, convert_with, Config, HeaderMatch};

fn convert_str(input: &str) -> String {
    String::from_utf8(convert(input.as_bytes()).unwrap()).unwrap()
}

#[test]
fn communication_labels_become_codes() {
    let out = convert_str("communication_type\nCall\nWHATSAPP\nUnknownX");
    assert_eq!(out, "communication_type\n0\n1\nUnknownX\n");
}

#[test]
fn semicolon_input_is_written_with_commas() {
    let out = convert_str("occurrence_status;other\nEM ANALISE;x");
    assert_eq!(out, "occurrence_status,other\n1,x\n");
}

#[test]
fn trailing_delimiter_column_is_removed() {
    let out = convert_str("id;communication_type;\n1;email;\n2; Telemetria ;\n");
    assert_eq!(out, "id,communication_type\n1,3\n2,4\n");
}

#[test]
fn rows_with_wrong_width_are_skipped() {
    let out = convert_str("a,b\n1,2\n3\n4,5,6\n7,8\n");
    assert_eq!(out, "a,b\n1,2\n7,8\n");
}

#[test]
fn padded_header_is_trimmed_and_matched() {
    let out = convert_str(" occurrence_types \nAcidente\nMulta de Transito\n");
    assert_eq!(out, "occurrence_types\n1\n5\n");
}

#[test]
fn header_case_is_exact_by_default() {
    let out = convert_str("Occurrence_Types \nAcidente\n");
    assert_eq!(out, "Occurrence_Types\nAcidente\n");
}

#[test]
fn header_case_can_be_ignored() {
    let config = Config {
        header_match: HeaderMatch::IgnoreCase,
        ..Config::default()
    };
    let conversion = convert_with(b"Occurrence_Types \nAcidente\n", &config).unwrap();
    assert_eq!(conversion.output, b"Occurrence_Types\n1\n");
    assert_eq!(conversion.stats.columns_normalized, vec!["Occurrence_Types"]);
}

#[test]
fn all_three_columns_and_passthrough_columns() {
    let input = "\
id;communication_type;occurrence_types;occurrence_status;plate
10;whatsapp;Dano a Carga;Concluída;ABC1D23
11;SALESFORCE;pico de velocidade;aguardando assinatura do motorista;XYZ9K88
12;fax;Roubo;em análise;
";
    let out = convert_str(input);
    assert_eq!(
        out,
        "\
id,communication_type,occurrence_types,occurrence_status,plate
10,1,7,13,ABC1D23
11,6,17,10,XYZ9K88
12,fax,Roubo,em análise,
"
    );
}

#[test]
fn missing_cells_stay_missing() {
    let out = convert_str("communication_type,other\n,a\nCALL,\n");
    assert_eq!(out, "communication_type,other\n,a\n0,\n");
}

#[test]
fn stats_describe_the_conversion() {
    let input = b"communication_type;x;\nCall;1;\nnope;2;\nbroken\n";
    let conversion = convert_with(input, &Config::default()).unwrap();
    let stats = &conversion.stats;
    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_dropped, 1);
    assert_eq!(stats.rows_written(), 2);
    assert_eq!(stats.columns_dropped, vec!["Unnamed: 2"]);
    assert_eq!(stats.cells_mapped, 1);
    assert_eq!(stats.cells_unmatched, 1);
    assert_eq!(stats.input_bytes, input.len());
    assert_eq!(stats.output_bytes, conversion.output.len());
}

#[test]
fn original_table_is_left_untouched() {
    let conversion = convert_with(b"communication_type\nCall\n", &Config::default()).unwrap();
    assert_eq!(
        conversion.original.get(0, "communication_type").unwrap().to_string(),
        "Call"
    );
    assert_eq!(
        conversion.converted.get(0, "communication_type").unwrap().as_code(),
        Some(0)
    );
}
