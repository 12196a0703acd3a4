/// Fixed source skeleton written into every created file, emitted verbatim
/// regardless of locale. Not configurable.
pub const SOURCE_TEMPLATE: &str = r#"
#include <iostream>
#include <vector>
using namespace std;

int main() {
    ios::sync_with_stdio(false);
    cin.tie(nullptr);
    int test;
    cin >> test;
    while (test--) {
        // Your code here
    }

  return 0;
}
"#;
