pub const SAMPLE_DATASET_JSON: &str = r#"{
  "data": [
    {
      "id": 1,
      "question": "What is the capital of France?",
      "rag_answer": "The capital of France is Paris.",
      "ground_truth": "Paris is the capital and most populous city of France."
    },
    {
      "id": 2,
      "question": "Who wrote Pride and Prejudice?",
      "rag_answer": "Pride and Prejudice was written by Jane Austen.",
      "ground_truth": "Pride and Prejudice is an 1813 novel by Jane Austen."
    },
    {
      "id": 3,
      "question": "What is the boiling point of water at sea level?",
      "rag_answer": "Water boils at 90 degrees Celsius.",
      "ground_truth": "At sea level, water boils at 100°C (212°F)."
    }
  ]
}
"#;

pub const SAMPLE_CONFIG_YAML: &str = r#"version: 1
input: mock_data.json
output_dir: .
judge:
  # Used only when OPENAI_API_KEY is set (or --judge openai).
  model: gpt-4
  max_tokens: 500
  temperature: 0.5
aggregation:
  # lenient: a missing/non-integer score counts as passing
  # strict: report it as an issue
  malformed_scores: lenient
"#;
