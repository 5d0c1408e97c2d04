pub(crate) fn build_prompt_impl(question: &str, rag_answer: &str, ground_truth: &str) -> String {
    format!(
        "Evaluate the following RAG chatbot answer against the ground truth context.\n\n\
         ### Question:\n{}\n\n\
         ### RAG Answer:\n{}\n\n\
         ### Ground Truth:\n{}\n\n\
         Provide scores (1-5) for:\n\
         - Correctness: How factually accurate is the answer?\n\
         - Completeness: How completely does the answer cover the ground truth?\n\
         - Relevance: How relevant is the answer to the question?\n\n\
         Also provide brief reasoning for each score.\n\n\
         Output ONLY strict JSON, no prose and no code fences, in exactly this shape \
         (score is an integer from 1 to 5, reasoning is a string):\n\
         {{\n  \
           \"correctness\": {{\"score\": int, \"reasoning\": \"string\"}},\n  \
           \"completeness\": {{\"score\": int, \"reasoning\": \"string\"}},\n  \
           \"relevance\": {{\"score\": int, \"reasoning\": \"string\"}}\n\
         }}",
        question, rag_answer, ground_truth
    )
}
