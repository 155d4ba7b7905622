use matrixgraph::{
    edge::total_weight,
    matrix::AdjacencyMatrix,
    render::{DotRenderer, Renderer},
};

fn main() {
    // A weighted ring of five nodes with one chord.
    let rows = [
        [0, 4, 0, 0, 1],
        [4, 0, 2, 0, 0],
        [0, 2, 0, 3, 5],
        [0, 0, 3, 0, 6],
        [1, 0, 5, 6, 0],
    ];

    let matrix = AdjacencyMatrix::from_rows(&rows).unwrap();
    println!("{matrix}");

    println!("symmetric:  {}", matrix.is_symmetric());
    println!("weighted:   {}", matrix.is_weighted());
    println!("connected:  {}", matrix.is_connected());
    println!("components: {}", matrix.count_connected_components());
    println!("class:      {}", matrix.classify());

    let tree = matrix.kruskal();
    println!("\nSpanning tree (total weight {}):", total_weight(&tree));
    for edge in &tree {
        println!("  {edge}");
    }

    // Only entries equal to one are drawn, so the binary view of this graph is sparse.
    println!();
    let mut renderer = DotRenderer::new(std::io::stdout());
    renderer.render(&matrix, !matrix.is_symmetric()).unwrap();
}
