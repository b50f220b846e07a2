fn main() {
    gallery_preview::install();
}
