use serde_json::{Value, json};
use crate::models::{
    Content, GenerateContentRequest, GenerateRecipesRequest, GenerationConfig, Part, PromptValue
};

/// Fields every generated recipe must carry.
pub const RECIPE_FIELDS: [&str; 5] = ["name", "description", "time", "ingredients", "instructions"];

const RESPONSE_MIME_TYPE: &str = "application/json";

pub fn build_prompt(ingredients: &PromptValue, recipe_count: &PromptValue) -> String {

    format!(
        "Create {recipe_count} different recipes from the following ingredients: {ingredients}.\n\
         The recipes should be simple, easy to follow, and have step-by-step instructions.\n\
         For each recipe, specify the approximate cooking time.\n\
         Return the response as a JSON array.\n\
         Each object in the array must match the schema."
    )

}

/// Structured-output constraint sent alongside the prompt.
pub fn recipe_schema() -> Value {

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "time": { "type": "STRING" },
                "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                "instructions": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": RECIPE_FIELDS
        }
    })

}

pub fn build_payload(request: &GenerateRecipesRequest) -> GenerateContentRequest {

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: build_prompt(&request.ingredients, &request.recipe_count)
            }]
        }],
        generation_config: GenerationConfig {
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: recipe_schema()
        }
    }

}
