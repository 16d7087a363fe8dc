//! Built-in template source.
//!
//! Every template wizgen ships is embedded into the binary at compile time
//! with `include_str!`, so an installed binary needs no template directory
//! on disk. Units are addressed by logical path; the mapping from logical
//! path to embedded asset lives entirely in this module.
//!
//! Logical path scheme:
//!
//! - `<backend>/server.<ext>` — the server entry file
//! - `shared/package.json`, `shared/tsconfig.json`
//! - `shared/db/<database>.<ext>`, `shared/models/<database>/User.<ext>`
//! - `middleware/<backend>/<name>.<ext>`
//! - `auth/jwt/<backend>/<ext>` — routes, controller and middleware subtree
//! - `frontend/<framework>` — a full Vite project skeleton

use wizgen_core::application::ports::TemplateSource;
use wizgen_core::domain::{TemplateNode, TemplateTree};

/// Template source over the embedded template set.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for BuiltinTemplates {
    fn unit(&self, logical_path: &str) -> Option<TemplateTree> {
        let tree = match logical_path {
            // servers
            "express/server.js" => TemplateTree::single(
                "server.js.tpl",
                include_str!("../templates/express/server.js.tpl"),
            ),
            "express/server.ts" => TemplateTree::single(
                "server.ts.tpl",
                include_str!("../templates/express/server.ts.tpl"),
            ),
            "fastify/server.js" => TemplateTree::single(
                "server.js.tpl",
                include_str!("../templates/fastify/server.js.tpl"),
            ),
            "fastify/server.ts" => TemplateTree::single(
                "server.ts.tpl",
                include_str!("../templates/fastify/server.ts.tpl"),
            ),

            // shared
            "shared/package.json" => TemplateTree::single(
                "package.json.tpl",
                include_str!("../templates/shared/package.json.tpl"),
            ),
            "shared/tsconfig.json" => TemplateTree::single(
                "tsconfig.json.tpl",
                include_str!("../templates/shared/tsconfig.json.tpl"),
            ),

            // database configs, always written as src/config/db.<ext>
            "shared/db/mongodb.js" => TemplateTree::single(
                "db.js.tpl",
                include_str!("../templates/shared/db/mongodb.js.tpl"),
            ),
            "shared/db/mongodb.ts" => TemplateTree::single(
                "db.ts.tpl",
                include_str!("../templates/shared/db/mongodb.ts.tpl"),
            ),
            "shared/db/postgresql.js" => TemplateTree::single(
                "db.js.tpl",
                include_str!("../templates/shared/db/postgresql.js.tpl"),
            ),
            "shared/db/postgresql.ts" => TemplateTree::single(
                "db.ts.tpl",
                include_str!("../templates/shared/db/postgresql.ts.tpl"),
            ),

            // models
            "shared/models/mongodb/User.js" => TemplateTree::single(
                "User.js.tpl",
                include_str!("../templates/shared/models/mongodb/User.js.tpl"),
            ),
            "shared/models/mongodb/User.ts" => TemplateTree::single(
                "User.ts.tpl",
                include_str!("../templates/shared/models/mongodb/User.ts.tpl"),
            ),
            "shared/models/postgresql/User.js" => TemplateTree::single(
                "User.js.tpl",
                include_str!("../templates/shared/models/postgresql/User.js.tpl"),
            ),
            "shared/models/postgresql/User.ts" => TemplateTree::single(
                "User.ts.tpl",
                include_str!("../templates/shared/models/postgresql/User.ts.tpl"),
            ),

            // middleware
            "middleware/express/cors.js" => middleware_file(
                "cors.js",
                include_str!("../templates/middleware/express/cors.js"),
            ),
            "middleware/express/cors.ts" => middleware_file(
                "cors.ts",
                include_str!("../templates/middleware/express/cors.ts"),
            ),
            "middleware/express/helmet.js" => middleware_file(
                "helmet.js",
                include_str!("../templates/middleware/express/helmet.js"),
            ),
            "middleware/express/helmet.ts" => middleware_file(
                "helmet.ts",
                include_str!("../templates/middleware/express/helmet.ts"),
            ),
            "middleware/express/morgan.js" => middleware_file(
                "morgan.js",
                include_str!("../templates/middleware/express/morgan.js"),
            ),
            "middleware/express/morgan.ts" => middleware_file(
                "morgan.ts",
                include_str!("../templates/middleware/express/morgan.ts"),
            ),
            "middleware/express/rate-limit.js" => middleware_file(
                "rate-limit.js",
                include_str!("../templates/middleware/express/rate-limit.js"),
            ),
            "middleware/express/rate-limit.ts" => middleware_file(
                "rate-limit.ts",
                include_str!("../templates/middleware/express/rate-limit.ts"),
            ),
            "middleware/fastify/cors.js" => middleware_file(
                "cors.js",
                include_str!("../templates/middleware/fastify/cors.js"),
            ),
            "middleware/fastify/cors.ts" => middleware_file(
                "cors.ts",
                include_str!("../templates/middleware/fastify/cors.ts"),
            ),
            "middleware/fastify/helmet.js" => middleware_file(
                "helmet.js",
                include_str!("../templates/middleware/fastify/helmet.js"),
            ),
            "middleware/fastify/helmet.ts" => middleware_file(
                "helmet.ts",
                include_str!("../templates/middleware/fastify/helmet.ts"),
            ),
            "middleware/fastify/rate-limit.js" => middleware_file(
                "rate-limit.js",
                include_str!("../templates/middleware/fastify/rate-limit.js"),
            ),
            "middleware/fastify/rate-limit.ts" => middleware_file(
                "rate-limit.ts",
                include_str!("../templates/middleware/fastify/rate-limit.ts"),
            ),

            // auth subtrees, rendered into src/
            "auth/jwt/express/js" => auth_tree(
                "js",
                include_str!("../templates/auth/jwt/express/js/auth.routes.js"),
                include_str!("../templates/auth/jwt/express/js/auth.controller.js"),
                include_str!("../templates/auth/jwt/express/js/auth.middleware.js"),
            ),
            "auth/jwt/express/ts" => auth_tree(
                "ts",
                include_str!("../templates/auth/jwt/express/ts/auth.routes.ts"),
                include_str!("../templates/auth/jwt/express/ts/auth.controller.ts"),
                include_str!("../templates/auth/jwt/express/ts/auth.middleware.ts"),
            ),
            "auth/jwt/fastify/js" => auth_tree(
                "js",
                include_str!("../templates/auth/jwt/fastify/js/auth.routes.js"),
                include_str!("../templates/auth/jwt/fastify/js/auth.controller.js"),
                include_str!("../templates/auth/jwt/fastify/js/auth.middleware.js"),
            ),
            "auth/jwt/fastify/ts" => auth_tree(
                "ts",
                include_str!("../templates/auth/jwt/fastify/ts/auth.routes.ts"),
                include_str!("../templates/auth/jwt/fastify/ts/auth.controller.ts"),
                include_str!("../templates/auth/jwt/fastify/ts/auth.middleware.ts"),
            ),

            // frontend skeletons
            "frontend/react" => react_tree(),
            "frontend/vue" => vue_tree(),

            _ => return None,
        };
        Some(tree)
    }
}

fn middleware_file(name: &str, body: &str) -> TemplateTree {
    TemplateTree::single(name, body)
}

fn auth_tree(ext: &str, routes: &str, controller: &str, middleware: &str) -> TemplateTree {
    TemplateTree::new(vec![
        TemplateNode::dir(
            "routes",
            vec![TemplateNode::file(format!("auth.routes.{ext}"), routes)],
        ),
        TemplateNode::dir(
            "controllers",
            vec![TemplateNode::file(
                format!("auth.controller.{ext}"),
                controller,
            )],
        ),
        TemplateNode::dir(
            "middlewares",
            vec![TemplateNode::file(
                format!("auth.middleware.{ext}"),
                middleware,
            )],
        ),
    ])
}

fn react_tree() -> TemplateTree {
    TemplateTree::new(vec![
        TemplateNode::file(
            "package.json.tpl",
            include_str!("../templates/frontend/react/package.json.tpl"),
        ),
        TemplateNode::file(
            "vite.config.js",
            include_str!("../templates/frontend/react/vite.config.js"),
        ),
        TemplateNode::file(
            "index.html.tpl",
            include_str!("../templates/frontend/react/index.html.tpl"),
        ),
        TemplateNode::dir(
            "public",
            vec![TemplateNode::file(
                "vite.svg",
                include_str!("../templates/frontend/react/public/vite.svg"),
            )],
        ),
        TemplateNode::dir(
            "src",
            vec![
                TemplateNode::file(
                    "main.jsx",
                    include_str!("../templates/frontend/react/src/main.jsx"),
                ),
                TemplateNode::file(
                    "App.jsx.tpl",
                    include_str!("../templates/frontend/react/src/App.jsx.tpl"),
                ),
            ],
        ),
    ])
}

fn vue_tree() -> TemplateTree {
    TemplateTree::new(vec![
        TemplateNode::file(
            "package.json.tpl",
            include_str!("../templates/frontend/vue/package.json.tpl"),
        ),
        TemplateNode::file(
            "vite.config.js",
            include_str!("../templates/frontend/vue/vite.config.js"),
        ),
        TemplateNode::file(
            "index.html.tpl",
            include_str!("../templates/frontend/vue/index.html.tpl"),
        ),
        TemplateNode::dir(
            "public",
            vec![TemplateNode::file(
                "vite.svg",
                include_str!("../templates/frontend/vue/public/vite.svg"),
            )],
        ),
        TemplateNode::dir(
            "src",
            vec![
                TemplateNode::file(
                    "main.js",
                    include_str!("../templates/frontend/vue/src/main.js"),
                ),
                TemplateNode::file(
                    "App.vue.tpl",
                    include_str!("../templates/frontend/vue/src/App.vue.tpl"),
                ),
            ],
        ),
    ])
}
