use occurrence_codes::{convert, load_table, Cell, Normalizer, OCCURRENCE_STATUS};
use proptest::prelude::*;

const HEADER: [&str; 4] = [
    "communication_type",
    "occurrence_types",
    "occurrence_status",
    "notes",
];

const LABELS: [&str; 10] = [
    "Call",
    "telemetria",
    "EMAIL",
    "Acidente",
    "cargo_damage",
    "Pico de Velocidade",
    "Em Negociacao",
    "concluída",
    "Rejected",
    "Aguardando NF",
];

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(LABELS.to_vec()), 0..3usize, 0..3usize)
            .prop_map(|(label, l, r)| format!("{}{}{}", " ".repeat(l), label, " ".repeat(r))),
        "[A-Za-z0-9 _]{0,10}",
        ("[a-z]{1,5}", "[a-z ]{0,5}").prop_map(|(a, b)| format!("\"{a}; {b}\"")),
    ]
}

fn csv_text() -> impl Strategy<Value = (String, usize)> {
    (
        prop::sample::select(vec![',', ';']),
        prop::collection::vec(prop::collection::vec(cell(), 4), 1..12),
    )
        .prop_map(|(sep, rows)| {
            let sep = sep.to_string();
            let mut text = HEADER.join(sep.as_str());
            text.push('\n');
            for row in &rows {
                text.push_str(&row.join(sep.as_str()));
                text.push('\n');
            }
            (text, rows.len())
        })
}

proptest! {
    #[test]
    fn conversion_is_idempotent((text, _) in csv_text()) {
        let once = convert(text.as_bytes()).unwrap();
        let twice = convert(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalizing_twice_changes_nothing((text, _) in csv_text()) {
        let table = load_table(text.as_bytes()).unwrap();
        let normalizer = Normalizer::standard();
        let once = normalizer.normalize(&table);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn shape_is_preserved((text, rows) in csv_text()) {
        let table = load_table(text.as_bytes()).unwrap();
        prop_assert_eq!(table.len(), rows);
        let converted = Normalizer::standard().normalize(&table);
        prop_assert_eq!(converted.columns(), table.columns());
        prop_assert_eq!(converted.len(), table.len());
        let reloaded = load_table(&convert(text.as_bytes()).unwrap()).unwrap();
        prop_assert_eq!(reloaded.columns(), table.columns());
        prop_assert_eq!(reloaded.len(), rows);
    }

    #[test]
    fn only_recognized_columns_change((text, _) in csv_text()) {
        let table = load_table(text.as_bytes()).unwrap();
        let converted = Normalizer::standard().normalize(&table);
        if let Some(idx) = table.column_index("notes") {
            prop_assert!(table.column(idx).eq(converted.column(idx)));
        }
    }

    #[test]
    fn unmatched_text_passes_through(raw in "[a-z]{1,3}[0-9]{1,4}.{0,8}") {
        let table_text = format!("occurrence_status,x\n\"{}\",1\n", raw.replace('"', "\"\""));
        let table = load_table(table_text.as_bytes()).unwrap();
        prop_assume!(OCCURRENCE_STATUS.get(&raw).is_none());
        let converted = Normalizer::standard().normalize(&table);
        prop_assert_eq!(converted.get(0, "occurrence_status"), Some(&Cell::Text(raw)));
    }
}
