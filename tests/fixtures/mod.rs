#![allow(dead_code)]
//! Vue template sources shared by the integration tests

pub const HELLO: &str = "<template>\n    <div>{{ Message }}</div>\n</template>\n";

pub const WIDGET: &str = "<template><span>X</span></template>";

pub const WITH_SCRIPT_AND_STYLE: &str = r#"<script>
export default { name: "todo" }
</script>

<template>
    <!-- the list -->
    <ul class="todos">
        <li v-for="todo in Todos">{{ todo.Text }}</li>
    </ul>
    <footer>ignored</footer>
</template>

<style>
.todos { margin: 0; }
</style>
"#;

pub const VOID_AND_EMPTY: &str = "<template><p><span></span><br><input type=checkbox></p></template>";

pub const NESTED_TEMPLATE: &str = r#"<template>
    <div>
        <template v-if="Visible"><b>shown</b></template>
    </div>
</template>
"#;

pub const NO_WRAPPER: &str = "<div>{{ Message }}</div>\n";

pub const TEXT_ONLY: &str = "<template>\n    just some text\n    <!-- and a comment -->\n</template>\n";
