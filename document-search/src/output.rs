//! JSON rendering of query responses.
//!
//! The response is passed through as the service returned it, using the
//! service's own field names. Absent optional fields are left out; every field
//! the response carries is rendered.

use aws_sdk_kendra::operation::query::QueryOutput;
use aws_sdk_kendra::primitives::DateTimeFormat;
use aws_sdk_kendra::types::{
    AdditionalResultAttribute, CollapsedResultDetail, Correction, DocumentAttribute,
    DocumentAttributeValue, DocumentAttributeValueCountPair, ExpandedResultItem, FacetResult,
    FeaturedResultsItem, Highlight, QueryResultItem, ScoreAttributes, SpellCorrectedQuery,
    TableCell, TableExcerpt, TableRow, TextWithHighlights, Warning,
};
use serde_json::{json, Map, Value};

/// Render a query response.
pub fn render_query_output(output: &QueryOutput) -> Value {
    let mut rendered = Map::new();

    insert_str(&mut rendered, "QueryId", output.query_id());
    insert_list(&mut rendered, "ResultItems", output.result_items(), render_result_item);
    insert_list(&mut rendered, "FacetResults", output.facet_results(), render_facet_result);
    if let Some(total) = output.total_number_of_results() {
        rendered.insert("TotalNumberOfResults".to_string(), json!(total));
    }
    insert_list(&mut rendered, "Warnings", output.warnings(), render_warning);
    insert_list(
        &mut rendered,
        "SpellCorrectedQueries",
        output.spell_corrected_queries(),
        render_spell_corrected_query,
    );
    insert_list(
        &mut rendered,
        "FeaturedResultsItems",
        output.featured_results_items(),
        render_featured_results_item,
    );

    Value::Object(rendered)
}

fn render_result_item(item: &QueryResultItem) -> Value {
    let mut rendered = Map::new();

    insert_str(&mut rendered, "Id", item.id());
    insert_str(&mut rendered, "Type", item.r#type().map(|t| t.as_str()));
    insert_str(&mut rendered, "Format", item.format().map(|f| f.as_str()));
    insert_list(
        &mut rendered,
        "AdditionalAttributes",
        item.additional_attributes(),
        render_additional_attribute,
    );
    insert_str(&mut rendered, "DocumentId", item.document_id());
    insert_value(&mut rendered, "DocumentTitle", item.document_title().map(render_text));
    insert_value(&mut rendered, "DocumentExcerpt", item.document_excerpt().map(render_text));
    insert_str(&mut rendered, "DocumentURI", item.document_uri());
    insert_list(
        &mut rendered,
        "DocumentAttributes",
        item.document_attributes(),
        render_document_attribute,
    );
    insert_value(
        &mut rendered,
        "ScoreAttributes",
        item.score_attributes().map(render_score_attributes),
    );
    insert_str(&mut rendered, "FeedbackToken", item.feedback_token());
    insert_value(
        &mut rendered,
        "TableExcerpt",
        item.table_excerpt().map(render_table_excerpt),
    );
    insert_value(
        &mut rendered,
        "CollapsedResultDetail",
        item.collapsed_result_detail().map(render_collapsed_detail),
    );

    Value::Object(rendered)
}

fn render_featured_results_item(item: &FeaturedResultsItem) -> Value {
    let mut rendered = Map::new();

    insert_str(&mut rendered, "Id", item.id());
    insert_str(&mut rendered, "Type", item.r#type().map(|t| t.as_str()));
    insert_list(
        &mut rendered,
        "AdditionalAttributes",
        item.additional_attributes(),
        render_additional_attribute,
    );
    insert_str(&mut rendered, "DocumentId", item.document_id());
    insert_value(&mut rendered, "DocumentTitle", item.document_title().map(render_text));
    insert_value(&mut rendered, "DocumentExcerpt", item.document_excerpt().map(render_text));
    insert_str(&mut rendered, "DocumentURI", item.document_uri());
    insert_list(
        &mut rendered,
        "DocumentAttributes",
        item.document_attributes(),
        render_document_attribute,
    );
    insert_str(&mut rendered, "FeedbackToken", item.feedback_token());

    Value::Object(rendered)
}

fn render_expanded_result_item(item: &ExpandedResultItem) -> Value {
    let mut rendered = Map::new();

    insert_str(&mut rendered, "Id", item.id());
    insert_str(&mut rendered, "DocumentId", item.document_id());
    insert_value(&mut rendered, "DocumentTitle", item.document_title().map(render_text));
    insert_value(&mut rendered, "DocumentExcerpt", item.document_excerpt().map(render_text));
    insert_str(&mut rendered, "DocumentURI", item.document_uri());
    insert_list(
        &mut rendered,
        "DocumentAttributes",
        item.document_attributes(),
        render_document_attribute,
    );

    Value::Object(rendered)
}

fn render_text(text: &TextWithHighlights) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "Text", text.text());
    insert_list(&mut rendered, "Highlights", text.highlights(), render_highlight);
    Value::Object(rendered)
}

fn render_highlight(highlight: &Highlight) -> Value {
    let mut rendered = Map::new();
    rendered.insert("BeginOffset".to_string(), json!(highlight.begin_offset()));
    rendered.insert("EndOffset".to_string(), json!(highlight.end_offset()));
    rendered.insert("TopAnswer".to_string(), json!(highlight.top_answer()));
    insert_str(&mut rendered, "Type", highlight.r#type().map(|t| t.as_str()));
    Value::Object(rendered)
}

fn render_additional_attribute(attribute: &AdditionalResultAttribute) -> Value {
    let mut rendered = Map::new();
    rendered.insert("Key".to_string(), json!(attribute.key()));
    rendered.insert("ValueType".to_string(), json!(attribute.value_type().as_str()));
    if let Some(value) = attribute.value() {
        let mut value_map = Map::new();
        insert_value(
            &mut value_map,
            "TextWithHighlightsValue",
            value.text_with_highlights_value().map(render_text),
        );
        rendered.insert("Value".to_string(), Value::Object(value_map));
    }
    Value::Object(rendered)
}

fn render_document_attribute(attribute: &DocumentAttribute) -> Value {
    let mut rendered = Map::new();
    rendered.insert("Key".to_string(), json!(attribute.key()));
    insert_value(
        &mut rendered,
        "Value",
        attribute.value().map(render_attribute_value),
    );
    Value::Object(rendered)
}

fn render_attribute_value(value: &DocumentAttributeValue) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "StringValue", value.string_value());
    if !value.string_list_value().is_empty() {
        rendered.insert("StringListValue".to_string(), json!(value.string_list_value()));
    }
    if let Some(long) = value.long_value() {
        rendered.insert("LongValue".to_string(), json!(long));
    }
    if let Some(date) = value.date_value() {
        let date = date
            .fmt(DateTimeFormat::DateTime)
            .map(Value::String)
            .unwrap_or_else(|_| json!(date.secs()));
        rendered.insert("DateValue".to_string(), date);
    }
    Value::Object(rendered)
}

fn render_score_attributes(score: &ScoreAttributes) -> Value {
    let mut rendered = Map::new();
    insert_str(
        &mut rendered,
        "ScoreConfidence",
        score.score_confidence().map(|c| c.as_str()),
    );
    Value::Object(rendered)
}

fn render_table_excerpt(table: &TableExcerpt) -> Value {
    let mut rendered = Map::new();
    insert_list(&mut rendered, "Rows", table.rows(), render_table_row);
    if let Some(total) = table.total_number_of_rows() {
        rendered.insert("TotalNumberOfRows".to_string(), json!(total));
    }
    Value::Object(rendered)
}

fn render_table_row(row: &TableRow) -> Value {
    json!({ "Cells": row.cells().iter().map(render_table_cell).collect::<Vec<_>>() })
}

fn render_table_cell(cell: &TableCell) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "Value", cell.value());
    rendered.insert("TopAnswer".to_string(), json!(cell.top_answer()));
    rendered.insert("Highlighted".to_string(), json!(cell.highlighted()));
    rendered.insert("Header".to_string(), json!(cell.header()));
    Value::Object(rendered)
}

fn render_collapsed_detail(detail: &CollapsedResultDetail) -> Value {
    let mut rendered = Map::new();
    insert_value(
        &mut rendered,
        "DocumentAttribute",
        detail.document_attribute().map(render_document_attribute),
    );
    insert_list(
        &mut rendered,
        "ExpandedResults",
        detail.expanded_results(),
        render_expanded_result_item,
    );
    Value::Object(rendered)
}

fn render_facet_result(facet: &FacetResult) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "DocumentAttributeKey", facet.document_attribute_key());
    insert_str(
        &mut rendered,
        "DocumentAttributeValueType",
        facet.document_attribute_value_type().map(|t| t.as_str()),
    );
    insert_list(
        &mut rendered,
        "DocumentAttributeValueCountPairs",
        facet.document_attribute_value_count_pairs(),
        render_value_count_pair,
    );
    Value::Object(rendered)
}

fn render_value_count_pair(pair: &DocumentAttributeValueCountPair) -> Value {
    let mut rendered = Map::new();
    insert_value(
        &mut rendered,
        "DocumentAttributeValue",
        pair.document_attribute_value().map(render_attribute_value),
    );
    if let Some(count) = pair.count() {
        rendered.insert("Count".to_string(), json!(count));
    }
    // Nested facets
    if !pair.facet_results().is_empty() {
        insert_list(&mut rendered, "FacetResults", pair.facet_results(), render_facet_result);
    }
    Value::Object(rendered)
}

fn render_warning(warning: &Warning) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "Message", warning.message());
    insert_str(&mut rendered, "Code", warning.code().map(|c| c.as_str()));
    Value::Object(rendered)
}

fn render_spell_corrected_query(query: &SpellCorrectedQuery) -> Value {
    let mut rendered = Map::new();
    insert_str(&mut rendered, "SuggestedQueryText", query.suggested_query_text());
    insert_list(&mut rendered, "Corrections", query.corrections(), render_correction);
    Value::Object(rendered)
}

fn render_correction(correction: &Correction) -> Value {
    let mut rendered = Map::new();
    if let Some(begin) = correction.begin_offset() {
        rendered.insert("BeginOffset".to_string(), json!(begin));
    }
    if let Some(end) = correction.end_offset() {
        rendered.insert("EndOffset".to_string(), json!(end));
    }
    insert_str(&mut rendered, "Term", correction.term());
    insert_str(&mut rendered, "CorrectedTerm", correction.corrected_term());
    Value::Object(rendered)
}

fn insert_str(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn insert_value(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn insert_list<T>(map: &mut Map<String, Value>, key: &str, items: &[T], render: fn(&T) -> Value) {
    map.insert(
        key.to_string(),
        Value::Array(items.iter().map(render).collect()),
    );
}
