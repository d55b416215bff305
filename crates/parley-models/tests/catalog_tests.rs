use parley_models::*;
use parley_types::TokenRate;

#[test]
fn test_every_limit_is_positive() {
    for (id, limit) in get_model_limits() {
        assert!(limit > 0, "{} has limit {}", id, limit);
    }
}

#[test]
fn test_every_cost_is_positive() {
    for (id, cost) in get_model_costs() {
        for rate in [cost.prompt, cost.completion] {
            assert!(rate.price > 0.0, "{} has price {}", id, rate.price);
            assert!(rate.unit > 0, "{} has unit {}", id, rate.unit);
        }
    }
}

#[test]
fn test_every_option_has_limit_and_cost() {
    let limits = get_model_limits();
    let costs = get_model_costs();

    for id in model_options() {
        assert!(limits.contains_key(id.as_str()), "{} has no limit", id);
        assert!(costs.contains_key(id.as_str()), "{} has no cost", id);
    }
}

#[test]
fn test_no_id_defined_twice_across_providers() {
    let total = all_model_specs().count();
    assert_eq!(get_model_limits().len(), total);
}

#[test]
fn test_model_options_order() {
    let options: Vec<String> = model_options().iter().map(|id| id.to_string()).collect();
    insta::assert_snapshot!(options.join("\n"), @r"
    openai:gpt-3.5-turbo
    openai:gpt-3.5-turbo-16k
    openai:gpt-4
    openai:gpt-4-32k
    openai:text-ada-001
    openai:text-babbage-001
    openai:text-curie-001
    openai:text-davinci-002
    openai:text-davinci-003
    cohere:command-nightly
    cohere:command-light-nightly
    replicate:replicate/llama-2-7b-chat
    replicate:replicate/llama-2-13b-chat
    replicate:replicate/llama-2-70b-chat
    pai-001-beta
    pai-001-light-beta
    ");
}

#[test]
fn test_known_limits() {
    let limits = get_model_limits();
    assert_eq!(limits.get("openai:gpt-3.5-turbo"), Some(&4096));
    assert_eq!(limits.get("openai:gpt-3.5-turbo-16k-0613"), Some(&16384));
    assert_eq!(limits.get("openai:text-ada-001"), Some(&2049));
    assert_eq!(limits.get("openai:text-davinci-002"), Some(&4097));
    assert_eq!(limits.get("replicate:replicate/llama-2-70b-chat"), Some(&4096));
    assert_eq!(limits.get("pai-001-light-beta"), Some(&4096));
}

#[test]
fn test_known_costs() {
    let costs = get_model_costs();

    let curie = costs["openai:text-curie-001"];
    assert_eq!(curie.prompt, TokenRate::per_million(3.00));
    assert_eq!(curie.completion, TokenRate::per_million(12.00));

    let gpt35 = costs["openai:gpt-3.5-turbo"];
    assert_eq!(gpt35.prompt, TokenRate::new(0.0015, 1000));
    assert_eq!(gpt35.completion, TokenRate::new(0.002, 1000));
}

#[test]
fn test_estimate_with_catalog_rates() {
    let cost = resolve_model_cost("openai:gpt-4").unwrap();
    let estimate = cost.estimate(1_000, 500);
    assert!((estimate.total - 0.06).abs() < 1e-9);
}
