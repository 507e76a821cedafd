use slipstream_api::{
    ArpField, DemandSlipField, OperatorSet, PostCodeField, QueryOptions, SearchCriteria,
};

#[test]
fn string_shorthand_is_a_prefix_match() {
    let filter = SearchCriteria::new()
        .field(DemandSlipField::DoCode, "ABC")
        .build();
    assert_eq!(filter.as_deref(), Some("DO_CODE like 'ABC*'"));
}

#[test]
fn numeric_shorthand_is_an_equality_test() {
    let filter = SearchCriteria::new()
        .field(DemandSlipField::Status, 1)
        .build();
    assert_eq!(filter.as_deref(), Some("STATUS eq 1"));
}

#[test]
fn boolean_shorthand_is_unquoted() {
    let filter = SearchCriteria::new().field("SETTLED", true).build();
    assert_eq!(filter.as_deref(), Some("SETTLED eq true"));
}

#[test]
fn value_list_compiles_to_an_or_chain() {
    let filter = SearchCriteria::new()
        .field("TAGS", vec!["A", "B"])
        .build();
    assert_eq!(filter.as_deref(), Some("(TAGS eq 'A' or TAGS eq 'B')"));
}

#[test]
fn empty_value_list_contributes_nothing() {
    let filter = SearchCriteria::new()
        .field("TAGS", Vec::<String>::new())
        .build();
    assert_eq!(filter, None);
}

#[test]
fn operator_clauses_keep_declaration_order() {
    let filter = SearchCriteria::new()
        .field(
            DemandSlipField::TotalAmount,
            OperatorSet::new().gte(100).lte(500),
        )
        .build();
    assert_eq!(
        filter.as_deref(),
        Some("TOTAL_AMOUNT gte 100 and TOTAL_AMOUNT lte 500")
    );
}

#[test]
fn operator_order_is_fixed_regardless_of_call_order() {
    let filter = SearchCriteria::new()
        .field(
            DemandSlipField::TotalAmount,
            OperatorSet::new().lte(500).gte(100).eq(250),
        )
        .build();
    assert_eq!(
        filter.as_deref(),
        Some("TOTAL_AMOUNT eq 250 and TOTAL_AMOUNT gte 100 and TOTAL_AMOUNT lte 500")
    );
}

#[test]
fn eq_operator_quotes_strings_only() {
    let filter = SearchCriteria::new()
        .field(ArpField::CustomerCode, OperatorSet::new().eq("C0001"))
        .field(ArpField::Amount, OperatorSet::new().eq(98000))
        .build();
    assert_eq!(
        filter.as_deref(),
        Some("CUSTOMER_CODE eq 'C0001' and AMOUNT eq 98000")
    );
}

#[test]
fn like_operator_uses_the_pattern_as_is() {
    let filter = SearchCriteria::new()
        .field(
            DemandSlipField::CustomerName,
            OperatorSet::new().like("*TRADING*"),
        )
        .build();
    assert_eq!(filter.as_deref(), Some("CUSTOMER_NAME like '*TRADING*'"));
}

#[test]
fn in_operator_compiles_to_an_or_chain() {
    let filter = SearchCriteria::new()
        .field(ArpField::Status, OperatorSet::new().is_in(vec![1, 2, 3]))
        .build();
    assert_eq!(
        filter.as_deref(),
        Some("(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)")
    );
}

#[test]
fn empty_operator_set_contributes_nothing() {
    let filter = SearchCriteria::new()
        .field(ArpField::Status, OperatorSet::new())
        .build();
    assert_eq!(filter, None);
}

#[test]
fn empty_criteria_build_to_none() {
    assert_eq!(SearchCriteria::new().build(), None);
}

#[test]
fn absent_optional_values_are_skipped() {
    let filter = SearchCriteria::new()
        .field_opt(DemandSlipField::DoCode, None::<&str>)
        .build();
    assert_eq!(filter, None);

    let filter = SearchCriteria::new()
        .field_opt(DemandSlipField::DoCode, Some("ABC"))
        .field_opt(DemandSlipField::Status, None::<i64>)
        .build();
    assert_eq!(filter.as_deref(), Some("DO_CODE like 'ABC*'"));
}

#[test]
fn fields_conjoin_in_insertion_order() {
    let filter = SearchCriteria::new()
        .field(DemandSlipField::DoCode, "ABC")
        .field(DemandSlipField::Status, 1)
        .build();
    assert_eq!(
        filter.as_deref(),
        Some("DO_CODE like 'ABC*' and STATUS eq 1")
    );
}

#[test]
fn embedded_quotes_pass_through_unescaped() {
    let filter = SearchCriteria::new()
        .field(
            DemandSlipField::CustomerName,
            OperatorSet::new().eq("O'HARA"),
        )
        .build();
    assert_eq!(filter.as_deref(), Some("CUSTOMER_NAME eq 'O'HARA'"));
}

#[test]
fn float_literals_are_unquoted() {
    let filter = SearchCriteria::new()
        .field("RATE", OperatorSet::new().gte(1.5))
        .build();
    assert_eq!(filter.as_deref(), Some("RATE gte 1.5"));
}

#[test]
fn prefecture_uses_its_abbreviated_wire_name() {
    let filter = SearchCriteria::new()
        .field(PostCodeField::Prefecture, "Tokyo")
        .build();
    assert_eq!(filter.as_deref(), Some("PREF like 'Tokyo*'"));
}

#[test]
fn filter_embeds_into_query_options() {
    let filter = SearchCriteria::new()
        .field(ArpField::Status, OperatorSet::new().is_in(vec![1, 2, 3]))
        .build()
        .unwrap();
    let query = QueryOptions::new()
        .with_limit(10)
        .with_filter(filter.clone())
        .encode();
    assert!(query.contains("limit=10"));

    let decoded: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    assert!(decoded.contains(&("q".to_string(), filter)));
}
