//! Replays one finished backend answer as a paced sequence of UI stream
//! events.
//!
//! Ordering is fixed: reasoning (if any), then sources (if any), then exactly
//! one text part. The answer is already complete in memory; the pauses only
//! shape how it is revealed.

use futures::stream::{self, Stream};
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::value_objects::Source;

pub const REASONING_ID: &str = "reasoning-1";
pub const TEXT_ID: &str = "text-1";
pub const ERROR_TEXT_ID: &str = "error-text-1";

/// Words emitted between two text pauses.
const TEXT_BURST: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiEvent {
    ReasoningStart {
        id: String,
    },
    ReasoningDelta {
        id: String,
        delta: String,
    },
    ReasoningEnd {
        id: String,
    },
    DataSources {
        data: Vec<Source>,
    },
    TextStart {
        id: String,
    },
    TextDelta {
        id: String,
        delta: String,
    },
    TextEnd {
        id: String,
    },
    Error {
        #[serde(rename = "errorText")]
        error_text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayPacing {
    pub reasoning_step: Duration,
    pub text_burst: Duration,
}

impl RelayPacing {
    pub fn none() -> Self {
        Self {
            reasoning_step: Duration::ZERO,
            text_burst: Duration::ZERO,
        }
    }
}

impl Default for RelayPacing {
    fn default() -> Self {
        Self {
            reasoning_step: Duration::from_millis(150),
            text_burst: Duration::from_millis(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayStep {
    pub event: UiEvent,
    pub pause_after: Duration,
}

impl RelayStep {
    fn immediate(event: UiEvent) -> Self {
        Self {
            event,
            pause_after: Duration::ZERO,
        }
    }
}

/// Appends the `**Sources:**` block cited by RAG answers.
pub fn format_with_sources(answer: &str, sources: &[Source]) -> String {
    if sources.is_empty() {
        return answer.to_string();
    }

    let citations: Vec<String> = sources.iter().map(Source::citation_line).collect();
    format!("{}\n\n**Sources:**\n{}", answer, citations.join("\n"))
}

/// User-facing text streamed in place of an answer when a turn fails.
pub fn remediation_text(error_message: &str) -> String {
    format!(
        "❌ **Error**: {}\n\nPlease check:\n- Model is installed and running\n- PDF documents are uploaded\n- Backend service is accessible",
        error_message
    )
}

pub fn plan_answer(
    reasoning_steps: &[String],
    sources: &[Source],
    text: &str,
    pacing: &RelayPacing,
) -> Vec<RelayStep> {
    let mut steps = Vec::new();

    if !reasoning_steps.is_empty() {
        steps.push(RelayStep::immediate(UiEvent::ReasoningStart {
            id: REASONING_ID.to_string(),
        }));
        for step in reasoning_steps {
            steps.push(RelayStep {
                event: UiEvent::ReasoningDelta {
                    id: REASONING_ID.to_string(),
                    delta: format!("{}\n", step),
                },
                pause_after: pacing.reasoning_step,
            });
        }
        steps.push(RelayStep::immediate(UiEvent::ReasoningEnd {
            id: REASONING_ID.to_string(),
        }));
    }

    if !sources.is_empty() {
        steps.push(RelayStep::immediate(UiEvent::DataSources {
            data: sources.to_vec(),
        }));
    }

    steps.extend(text_steps(TEXT_ID, text, pacing));
    steps
}

pub fn plan_failure(error_message: &str, pacing: &RelayPacing) -> Vec<RelayStep> {
    let mut steps = vec![RelayStep::immediate(UiEvent::Error {
        error_text: error_message.to_string(),
    })];
    steps.extend(text_steps(
        ERROR_TEXT_ID,
        &remediation_text(error_message),
        pacing,
    ));
    steps
}

fn text_steps(id: &str, text: &str, pacing: &RelayPacing) -> Vec<RelayStep> {
    let mut steps = vec![RelayStep::immediate(UiEvent::TextStart { id: id.to_string() })];

    for (index, word) in text.split(' ').enumerate() {
        let pause_after = if index % TEXT_BURST == 0 {
            pacing.text_burst
        } else {
            Duration::ZERO
        };
        steps.push(RelayStep {
            event: UiEvent::TextDelta {
                id: id.to_string(),
                delta: format!("{} ", word),
            },
            pause_after,
        });
    }

    steps.push(RelayStep::immediate(UiEvent::TextEnd { id: id.to_string() }));
    steps
}

/// Emits the planned events in order, sleeping between them as planned.
/// Runs to the end once started; a dropped consumer simply stops polling.
pub fn into_event_stream(steps: Vec<RelayStep>) -> impl Stream<Item = UiEvent> + Send + 'static {
    stream::unfold(
        (steps.into_iter(), Duration::ZERO),
        |(mut remaining, pending_pause)| async move {
            let step = remaining.next()?;
            if !pending_pause.is_zero() {
                sleep(pending_pause).await;
            }
            Some((step.event, (remaining, step.pause_after)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn source(name: &str, chunk: i64) -> Source {
        Source {
            pdf_name: name.to_string(),
            pdf_id: format!("id-{}", name),
            chunk_index: chunk,
        }
    }

    fn events(steps: &[RelayStep]) -> Vec<&UiEvent> {
        steps.iter().map(|s| &s.event).collect()
    }

    fn text_deltas(steps: &[RelayStep]) -> String {
        steps
            .iter()
            .filter_map(|s| match &s.event {
                UiEvent::TextDelta { delta, .. } => Some(delta.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_text_deltas_reconstruct_formatted_answer() {
        let texts = [
            "single",
            "two  spaces and\nnewlines **Sources:**",
            "",
            " leading and trailing ",
        ];

        for text in texts {
            let steps = plan_answer(&[], &[], text, &RelayPacing::none());
            let joined = text_deltas(&steps);
            assert_eq!(joined.strip_suffix(' '), Some(text));

            let starts = steps
                .iter()
                .filter(|s| matches!(s.event, UiEvent::TextStart { .. }))
                .count();
            let ends = steps
                .iter()
                .filter(|s| matches!(s.event, UiEvent::TextEnd { .. }))
                .count();
            assert_eq!((starts, ends), (1, 1));
            assert!(matches!(steps.first().unwrap().event, UiEvent::TextStart { .. }));
            assert!(matches!(steps.last().unwrap().event, UiEvent::TextEnd { .. }));
        }
    }

    #[test]
    fn test_reasoning_is_bracketed_and_precedes_sources_and_text() {
        let reasoning = vec!["Looked up chunks".to_string(), "Drafted answer".to_string()];
        let sources = vec![source("a.pdf", 1)];
        let steps = plan_answer(&reasoning, &sources, "The answer", &RelayPacing::none());
        let events = events(&steps);

        assert_eq!(
            events[0],
            &UiEvent::ReasoningStart {
                id: REASONING_ID.to_string()
            }
        );
        let reasoning_text: String = events
            .iter()
            .filter_map(|e| match e {
                UiEvent::ReasoningDelta { delta, .. } => Some(delta.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(reasoning_text.strip_suffix('\n'), Some(reasoning.join("\n").as_str()));
        assert_eq!(
            events[3],
            &UiEvent::ReasoningEnd {
                id: REASONING_ID.to_string()
            }
        );
        assert_eq!(events[4], &UiEvent::DataSources { data: sources });
        assert_eq!(
            events[5],
            &UiEvent::TextStart {
                id: TEXT_ID.to_string()
            }
        );
    }

    #[test]
    fn test_no_reasoning_or_sources_means_text_only() {
        let steps = plan_answer(&[], &[], "Hi there", &RelayPacing::none());
        assert!(steps.iter().all(|s| matches!(
            s.event,
            UiEvent::TextStart { .. } | UiEvent::TextDelta { .. } | UiEvent::TextEnd { .. }
        )));
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_pacing_schedule() {
        let pacing = RelayPacing::default();
        let reasoning = vec!["a".to_string()];
        let steps = plan_answer(&reasoning, &[], "w0 w1 w2 w3 w4", &pacing);

        assert_eq!(steps[1].pause_after, Duration::from_millis(150));

        let pauses: Vec<Duration> = steps
            .iter()
            .filter(|s| matches!(s.event, UiEvent::TextDelta { .. }))
            .map(|s| s.pause_after)
            .collect();
        let burst = Duration::from_millis(30);
        assert_eq!(
            pauses,
            vec![burst, Duration::ZERO, Duration::ZERO, burst, Duration::ZERO]
        );
    }

    #[test]
    fn test_failure_plan_streams_remediation() {
        let steps = plan_failure("model not found", &RelayPacing::none());

        assert_eq!(
            steps[0].event,
            UiEvent::Error {
                error_text: "model not found".to_string()
            }
        );
        assert_eq!(
            steps[1].event,
            UiEvent::TextStart {
                id: ERROR_TEXT_ID.to_string()
            }
        );
        let joined = text_deltas(&steps);
        assert_eq!(
            joined.strip_suffix(' '),
            Some(remediation_text("model not found").as_str())
        );
    }

    #[test]
    fn test_sources_block_format() {
        let text = format_with_sources("Refunds take 5 days.", &[source("policy.pdf", 3), source("faq.pdf", 0)]);
        assert_eq!(
            text,
            "Refunds take 5 days.\n\n**Sources:**\n- policy.pdf (chunk 3)\n- faq.pdf (chunk 0)"
        );
        assert_eq!(format_with_sources("plain", &[]), "plain");
    }

    #[test]
    fn test_event_wire_shape() {
        let delta = serde_json::to_value(UiEvent::TextDelta {
            id: TEXT_ID.to_string(),
            delta: "hi ".to_string(),
        })
        .unwrap();
        assert_eq!(delta, serde_json::json!({"type": "text-delta", "id": "text-1", "delta": "hi "}));

        let error = serde_json::to_value(UiEvent::Error {
            error_text: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(error, serde_json::json!({"type": "error", "errorText": "boom"}));

        let sources = serde_json::to_value(UiEvent::DataSources { data: vec![] }).unwrap();
        assert_eq!(sources["type"], "data-sources");
    }

    #[tokio::test]
    async fn test_stream_preserves_plan_order() {
        let steps = plan_answer(
            &["think".to_string()],
            &[source("a.pdf", 1)],
            "one two three four",
            &RelayPacing::none(),
        );
        let expected: Vec<UiEvent> = steps.iter().map(|s| s.event.clone()).collect();

        let streamed: Vec<UiEvent> = into_event_stream(steps).collect().await;
        assert_eq!(streamed, expected);
    }
}
