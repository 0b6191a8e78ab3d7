//! Prints the registry content as a notebook would see it after setup.
//!
//! Run with `RUST_LOG=debug` to see the style application log line.

use figrc::palette::Palette;

fn main() {
    env_logger::init();

    figrc::init(false);

    let rc = figrc::rc_params();
    println!("figure dpi:     {}", rc.figure_dpi);
    println!("axes width:     {}", rc.axes_line_width);
    println!("line width:     {}", rc.line_width);
    println!("font size:      {} (legend {})", rc.font_size, rc.legend_font_size);
    println!("pdf font type:  {}", rc.pdf_font_type.code());
    println!("face color:     {}", rc.figure_face_color.html());
    println!("sans-serif:     {}", rc.sans_serif_fallback.join(", "));
    println!("text rendering: {:?}", rc.text_rendering);

    println!("color cycle (wrapping after {}):", rc.color_cycle.len());
    for (i, color) in rc.color_cycle.cycle().take(8).enumerate() {
        println!("  series {i}: {}", color.html());
    }
}
