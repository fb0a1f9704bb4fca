use fcnet::{FeedForwardNetwork, Matrix, ModelMetadata, TopologySpec};

fn main() {
    let spec = TopologySpec {
        name: "xor".to_string(),
        input_count: 2,
        hidden_layer_sizes: vec![2],
        output_count: 1,
        metadata: Some(ModelMetadata {
            description: Some("Hand-weighted XOR gate".to_string()),
            output_labels: Some(vec!["xor".to_string()]),
        }),
    };

    // Hand-picked weights: the first hidden neuron approximates OR, the
    // second AND, and the output layer combines them as OR minus AND.
    // Column 0 of each matrix is the bias weight.
    let weights = vec![
        Matrix::from_data(vec![
            vec![-5.0, 10.0, 10.0],
            vec![-15.0, 10.0, 10.0],
        ]),
        Matrix::from_data(vec![
            vec![-5.0, 10.0, -10.0],
        ]),
    ];

    let topology = spec.build(weights).expect("weights match the spec shapes");
    let mut network = FeedForwardNetwork::from_topology(topology);

    let label = spec
        .metadata
        .as_ref()
        .and_then(|m| m.output_labels.as_ref())
        .map_or("out", |labels| labels[0].as_str());

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];

    for input in &inputs {
        let output = network.fire(input).expect("input length matches the spec");
        println!("Input: {:?} -> {} = {:.4}", input, label, output[0]);
    }
}
